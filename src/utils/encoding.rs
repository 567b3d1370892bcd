//! Soft text decoding.

/// Decode bytes as UTF-8, replacing invalid sequences with U+FFFD.
///
/// Line endings are normalized: `\r\n` and lone `\r` both become `\n`.
pub fn decode_soft(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    if !text.contains('\r') {
        return text.into_owned();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Newline count, plus one for a non-empty final line without a terminator.
pub fn count_lines(text: &str) -> usize {
    let newlines = text.bytes().filter(|&b| b == b'\n').count();
    if !text.is_empty() && !text.ends_with('\n') {
        newlines + 1
    } else {
        newlines
    }
}

#[cfg(test)]
mod tests {
    use super::{count_lines, decode_soft};

    #[test]
    fn counts_trailing_partial_line() {
        assert_eq!(count_lines(""), 0);
        assert_eq!(count_lines("a"), 1);
        assert_eq!(count_lines("a\n"), 1);
        assert_eq!(count_lines("a\nb"), 2);
        assert_eq!(count_lines("\n\n"), 2);
    }

    #[test]
    fn invalid_bytes_are_replaced() {
        let text = decode_soft(b"ok \xff\xfe end\n");
        assert!(text.starts_with("ok "));
        assert!(text.contains('\u{FFFD}'));
        assert!(text.ends_with(" end\n"));
    }

    #[test]
    fn carriage_returns_become_newlines() {
        assert_eq!(decode_soft(b"a\r\nb\rc\n"), "a\nb\nc\n");
    }
}
