//! Target specifier parsing: `path` or `path:pat1,pat2`.

use crate::domain::FileSpec;
use crate::utils::resolve_path;
use std::path::Path;

/// Parse one command-line target relative to `cwd`.
///
/// A trailing `/` is stripped before splitting on the first `:`; empty
/// patterns are dropped.
pub fn parse_target(target: &str, cwd: &Path) -> FileSpec {
    let trimmed = target.trim_end_matches('/');
    let trimmed = if trimmed.is_empty() && target.starts_with('/') { "/" } else { trimmed };

    let (dir, patterns) = match trimmed.split_once(':') {
        Some((dir, pats)) => {
            let patterns = pats.split(',').filter(|p| !p.is_empty()).map(String::from).collect();
            (dir, patterns)
        }
        None => (trimmed, Vec::new()),
    };

    let dir = if dir.is_empty() { "." } else { dir };
    FileSpec { directory: resolve_path(cwd, Path::new(dir)), patterns }
}

/// Human-readable description of a specifier's patterns.
pub fn describe_patterns(spec: &FileSpec) -> String {
    if spec.patterns.is_empty() {
        "all recursively".to_string()
    } else {
        spec.patterns.join(",")
    }
}
