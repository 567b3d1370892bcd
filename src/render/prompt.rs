//! Header part (`000.txt`): guidance prompt, file list and trees.

use crate::utils::display_path;
use std::path::{Path, PathBuf};

pub const FILES_LIST_HEADER: &str = concat!(
    "Complete file list across all parts:\n",
    "P.S. Be sure to specify the name of the file you are making changes to.\n"
);
pub const DIRECTORY_STRUCTURE_HEADER: &str = "Project structure:\n\n";
pub const FULL_TREE_HEADER: &str = "Full project tree (unfiltered):\n\n";

/// Inputs for the header part.
pub struct PromptHeader<'a> {
    pub prompt: &'a str,
    /// Listed only when present and non-empty
    pub files: Option<&'a [PathBuf]>,
    pub tree: Option<&'a [String]>,
    pub full_tree: Option<&'a [String]>,
    pub display_base: &'a Path,
}

impl PromptHeader<'_> {
    pub fn render(&self) -> String {
        let mut buf: Vec<String> = vec![self.prompt.to_string()];
        if let Some(files) = self.files.filter(|f| !f.is_empty()) {
            buf.push(format!("\n\n{FILES_LIST_HEADER}"));
            buf.extend(files.iter().map(|p| format!("- {}", display_path(p, self.display_base))));
        }
        if let Some(tree) = self.tree.filter(|t| !t.is_empty()) {
            buf.push(format!("\n\n{DIRECTORY_STRUCTURE_HEADER}"));
            buf.extend(tree.iter().cloned());
        }
        if let Some(tree) = self.full_tree.filter(|t| !t.is_empty()) {
            buf.push(format!("\n\n{FULL_TREE_HEADER}"));
            buf.extend(tree.iter().cloned());
        }
        let mut text = buf.join("\n");
        text.push('\n');
        text
    }
}
