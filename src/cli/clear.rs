//! `clear` target: remove the output directory

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Delete `dir` if present; `label` names it in the absence message.
pub fn run(dir: &Path, label: &Path) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir)
            .with_context(|| format!("Failed to remove {}", dir.display()))?;
        println!("Removed {}", dir.display());
    } else {
        println!("{} does not exist", label.display());
    }
    Ok(())
}
