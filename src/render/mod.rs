//! Text rendering for the header part and directory trees

pub mod prompt;
pub mod tree;

pub use prompt::PromptHeader;
pub use tree::{TreeMode, TreeRenderer};

use crate::domain::{Config, FilterConfig, CONFIG_FILE_NAME};
use std::collections::BTreeSet;

/// Tree renderer whose exclusions follow the loaded configuration.
pub fn tree_renderer_for(config: &Config, filter: &FilterConfig) -> TreeRenderer {
    let mut housekeeping_dirs = BTreeSet::from([".git".to_string()]);
    if let Some(name) = config.output_dir.file_name().and_then(|n| n.to_str()) {
        housekeeping_dirs.insert(name.to_string());
    }
    TreeRenderer::new(
        filter.ignored_dirs.clone(),
        filter.ignored_files.clone(),
        housekeeping_dirs,
        BTreeSet::from([CONFIG_FILE_NAME.to_string()]),
    )
}
