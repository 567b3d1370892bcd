//! Content fingerprints.

use sha2::{Digest, Sha256};

/// Bytes of file content covered by the fingerprint.
pub const DIGEST_PREFIX_BYTES: usize = 4096;

/// Hex characters kept from the SHA-256 digest.
pub const DIGEST_HEX_LEN: usize = 12;

/// Short SHA-256 fingerprint of the first 4096 bytes of `content`.
pub fn short_digest(content: &[u8]) -> String {
    let head = &content[..content.len().min(DIGEST_PREFIX_BYTES)];
    let mut hasher = Sha256::new();
    hasher.update(head);
    let digest = hasher.finalize();
    format!("{:x}", digest)[..DIGEST_HEX_LEN].to_string()
}

#[cfg(test)]
mod tests {
    use super::short_digest;

    #[test]
    fn digest_of_empty_input() {
        assert_eq!(short_digest(b""), "e3b0c44298fc");
    }

    #[test]
    fn only_prefix_is_hashed() {
        let mut a = vec![b'x'; 4096];
        let mut b = a.clone();
        a.extend_from_slice(b"tail one");
        b.extend_from_slice(b"another tail");
        assert_eq!(short_digest(&a), short_digest(&b));
        assert_ne!(short_digest(&a), short_digest(b"x"));
        assert_eq!(short_digest(&a).len(), 12);
    }
}
