//! Utility functions

pub mod encoding;
pub mod hashing;
pub mod paths;

pub use encoding::{count_lines, decode_soft};
pub use hashing::short_digest;
pub use paths::{clean_label, display_path, resolve_path, to_posix};
