//! Path display helpers.

use std::path::{Component, Path, PathBuf};

/// Relative path joined with forward slashes.
pub fn to_posix(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Path shown to the user: relative to `base` when under it, absolute otherwise.
pub fn display_path(path: &Path, base: &Path) -> String {
    match path.strip_prefix(base) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel.display().to_string(),
        _ => path.display().to_string(),
    }
}

/// `path` as typed, minus `.` components and trailing separators (`./src/` is `src`).
pub fn clean_label(path: &Path) -> String {
    let cleaned: PathBuf = path.components().filter(|c| *c != Component::CurDir).collect();
    if cleaned.as_os_str().is_empty() {
        ".".to_string()
    } else {
        cleaned.display().to_string()
    }
}

/// Resolve `path` against `cwd`, following symlinks when the path exists.
///
/// Paths that do not exist are normalized lexically so `.` and `..` still
/// collapse.
pub fn resolve_path(cwd: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() { path.to_path_buf() } else { cwd.join(path) };
    if let Ok(canonical) = joined.canonicalize() {
        return canonical;
    }
    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
