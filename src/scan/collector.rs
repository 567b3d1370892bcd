//! Candidate file discovery under a target directory.

use crate::domain::CandidateFile;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Lists the regular files under one base directory.
pub struct FileCollector {
    root: PathBuf,
    use_git: bool,
}

impl FileCollector {
    pub fn new(root: PathBuf) -> Self {
        Self { root, use_git: false }
    }

    /// Take the file universe from `git ls-files` when it succeeds.
    pub fn use_git(mut self, value: bool) -> Self {
        self.use_git = value;
        self
    }

    /// Collect candidates; a missing root yields an empty list with a warning.
    pub fn collect(&self) -> Vec<CandidateFile> {
        if !self.root.exists() {
            warn!("Directory {} does not exist", self.root.display());
            return Vec::new();
        }
        if !self.root.is_dir() {
            warn!("{} is not a directory", self.root.display());
            return Vec::new();
        }

        if self.use_git {
            if let Some(files) = self.git_tracked_files() {
                return files;
            }
            debug!("git ls-files unavailable in {}, walking instead", self.root.display());
        }
        self.walk_files()
    }

    fn walk_files(&self) -> Vec<CandidateFile> {
        WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    debug!("Skipping unreadable entry: {err}");
                    None
                }
            })
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| CandidateFile::under(&self.root, entry.into_path()))
            .collect()
    }

    fn git_tracked_files(&self) -> Option<Vec<CandidateFile>> {
        let output = Command::new("git")
            .arg("ls-files")
            .current_dir(&self.root)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|err| debug!("Failed to run git: {err}"))
            .ok()?;
        if !output.status.success() {
            debug!("git ls-files exited with {}", output.status);
            return None;
        }

        let listing = String::from_utf8_lossy(&output.stdout);
        let files = listing
            .lines()
            .filter(|line| !line.is_empty())
            .filter_map(|line| resolve_tracked(&self.root, line))
            .collect();
        Some(files)
    }
}

fn resolve_tracked(root: &Path, line: &str) -> Option<CandidateFile> {
    let path = root.join(line).canonicalize().ok()?;
    if !path.is_file() {
        return None;
    }
    CandidateFile::under(root, path)
}
