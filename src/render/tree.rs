//! Directory tree rendering with box-drawing connectors.

use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Which entries a rendered tree hides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeMode {
    /// Hide ignored directories and ignored file names
    Filtered,
    /// Hide only version-control and the tool's own housekeeping entries
    Full,
}

/// Renders directory trees against a fixed set of exclusions.
#[derive(Debug, Clone)]
pub struct TreeRenderer {
    ignored_dirs: BTreeSet<String>,
    ignored_files: BTreeSet<String>,
    housekeeping_dirs: BTreeSet<String>,
    housekeeping_files: BTreeSet<String>,
}

struct Entry {
    path: PathBuf,
    name: String,
    is_file: bool,
    is_dir: bool,
}

impl TreeRenderer {
    pub fn new(
        ignored_dirs: BTreeSet<String>,
        ignored_files: BTreeSet<String>,
        housekeeping_dirs: BTreeSet<String>,
        housekeeping_files: BTreeSet<String>,
    ) -> Self {
        Self { ignored_dirs, ignored_files, housekeeping_dirs, housekeeping_files }
    }

    /// Lines of the tree rooted at `root`; the first line is `root` itself.
    pub fn render(&self, root: &Path, mode: TreeMode) -> Vec<String> {
        self.render_labeled(root, &root.display().to_string(), mode)
    }

    /// Like [`render`](Self::render), but headed by `label` instead of the path.
    pub fn render_labeled(&self, root: &Path, label: &str, mode: TreeMode) -> Vec<String> {
        if !root.is_dir() {
            return vec![format!("{label} [directory does not exist]")];
        }

        let mut lines = vec![label.to_string()];
        match self.children(root, mode) {
            Ok(kids) => self.walk_children(&kids, "", mode, &mut lines),
            Err(_) => lines.push("  [Permission denied]".to_string()),
        }
        lines
    }

    fn walk_children(&self, kids: &[Entry], prefix: &str, mode: TreeMode, lines: &mut Vec<String>) {
        for (i, kid) in kids.iter().enumerate() {
            let last = i + 1 == kids.len();
            let connector = if last { "└── " } else { "├── " };
            lines.push(format!("{prefix}{connector}{}", kid.name));

            if !kid.is_dir {
                continue;
            }
            let child_prefix = format!("{prefix}{}", if last { "    " } else { "│   " });
            match self.children(&kid.path, mode) {
                Ok(grandkids) => self.walk_children(&grandkids, &child_prefix, mode, lines),
                Err(err) if err.kind() == ErrorKind::PermissionDenied => {
                    lines.push(format!("{child_prefix}[Permission denied]"));
                }
                Err(err) => lines.push(format!("{child_prefix}[Unreadable: {err}]")),
            }
        }
    }

    /// Sorted, filtered entries of `dir`: directories first, then case-insensitive by name.
    fn children(&self, dir: &Path, mode: TreeMode) -> std::io::Result<Vec<Entry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().into_owned();
            // Symlinked directories are listed but not descended.
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            let is_file = path.is_file();
            if self.hides(&name, is_dir || path.is_dir(), is_file, mode) {
                continue;
            }
            entries.push(Entry { path, name, is_file, is_dir });
        }
        entries.sort_by(|a, b| {
            a.is_file
                .cmp(&b.is_file)
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });
        Ok(entries)
    }

    fn hides(&self, name: &str, is_dir: bool, is_file: bool, mode: TreeMode) -> bool {
        let (dirs, files) = match mode {
            TreeMode::Filtered => (&self.ignored_dirs, &self.ignored_files),
            TreeMode::Full => (&self.housekeeping_dirs, &self.housekeeping_files),
        };
        (is_dir && dirs.contains(name)) || (is_file && files.contains(name))
    }
}

#[cfg(test)]
mod tests {
    use super::{TreeMode, TreeRenderer};
    use std::collections::BTreeSet;
    use std::fs;
    use tempfile::TempDir;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn renderer() -> TreeRenderer {
        TreeRenderer::new(
            set(&[".git", ".vibe", "__pycache__"]),
            set(&[".env", "vibe.toml"]),
            set(&[".git", ".vibe"]),
            set(&["vibe.toml"]),
        )
    }

    fn fixture() -> TempDir {
        let dir = TempDir::new().expect("temp dir");
        let root = dir.path();
        fs::create_dir_all(root.join("src/__pycache__")).expect("mkdir");
        fs::create_dir_all(root.join("Docs")).expect("mkdir");
        fs::create_dir_all(root.join(".vibe")).expect("mkdir");
        fs::write(root.join("src/main.py"), "").expect("write");
        fs::write(root.join("src/__pycache__/main.pyc"), "").expect("write");
        fs::write(root.join("Docs/guide.md"), "").expect("write");
        fs::write(root.join("b.txt"), "").expect("write");
        fs::write(root.join("A.txt"), "").expect("write");
        fs::write(root.join(".env"), "").expect("write");
        fs::write(root.join("vibe.toml"), "").expect("write");
        dir
    }

    #[test]
    fn filtered_tree_orders_dirs_first_and_hides_noise() {
        let dir = fixture();
        let lines = renderer().render(dir.path(), TreeMode::Filtered);
        assert_eq!(
            lines,
            vec![
                dir.path().display().to_string(),
                "├── Docs".to_string(),
                "│   └── guide.md".to_string(),
                "├── src".to_string(),
                "│   └── main.py".to_string(),
                "├── A.txt".to_string(),
                "└── b.txt".to_string(),
            ]
        );
    }

    #[test]
    fn full_tree_shows_everything_but_housekeeping() {
        let dir = fixture();
        let lines = renderer().render(dir.path(), TreeMode::Full);
        assert!(lines.contains(&"│   ├── __pycache__".to_string()));
        assert!(lines.contains(&"│   │   └── main.pyc".to_string()));
        assert!(lines.contains(&"├── .env".to_string()));
        assert!(!lines.iter().any(|l| l.ends_with(".vibe")));
        assert!(!lines.iter().any(|l| l.ends_with("vibe.toml")));
    }

    #[test]
    fn missing_root_is_a_single_line() {
        let dir = TempDir::new().expect("temp dir");
        let missing = dir.path().join("nope");
        let lines = renderer().render(&missing, TreeMode::Filtered);
        assert_eq!(lines, vec![format!("{} [directory does not exist]", missing.display())]);
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_subdirectory_gets_placeholder() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().expect("temp dir");
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).expect("mkdir");
        fs::write(locked.join("secret.txt"), "").expect("write");
        fs::write(dir.path().join("open.txt"), "").expect("write");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).expect("chmod");

        let lines = renderer().render(dir.path(), TreeMode::Filtered);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("chmod back");

        // Root ignores permission bits, so only assert when the lock took effect.
        if lines.iter().any(|l| l.contains("[Permission denied]")) {
            assert!(lines.contains(&"│   [Permission denied]".to_string()));
        }
        assert!(lines.contains(&"└── open.txt".to_string()));
    }
}
