//! Rendered per-file blocks.

use crate::domain::language_for;
use crate::error::{PackError, Result};
use crate::utils::{count_lines, decode_soft, display_path, short_digest};
use std::fs;
use std::path::Path;

/// One file's decoded text and metadata, ready to be fenced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBlock {
    /// Path shown in headers and manifests
    pub label: String,

    /// Fence language tag (may be empty)
    pub language: &'static str,

    /// Soft-decoded content
    pub text: String,

    pub line_count: usize,

    /// Size on disk in bytes
    pub size_bytes: u64,

    /// Short fingerprint of the first 4096 bytes
    pub digest: String,
}

impl FileBlock {
    /// Read `path` and build its block; labels are relative to `display_base`.
    pub fn load(path: &Path, display_base: &Path) -> Result<Self> {
        let read_err = |source| PackError::Read { path: path.to_path_buf(), source };
        let bytes = fs::read(path).map_err(read_err)?;
        let size_bytes = fs::metadata(path).map_err(read_err)?.len();
        let text = decode_soft(&bytes);

        Ok(Self {
            label: display_path(path, display_base),
            language: language_for(path),
            line_count: count_lines(&text),
            digest: short_digest(&bytes),
            size_bytes,
            text,
        })
    }

    /// Metadata header line followed by the fenced content.
    pub fn render(&self) -> String {
        format!(
            "{}  |  {} lines  |  {} bytes  |  sha:{}\n```{}\n{}\n```\n",
            self.label, self.line_count, self.size_bytes, self.digest, self.language, self.text
        )
    }

    /// Content split into consecutive groups of at most `max_lines` lines.
    pub fn split_lines(&self, max_lines: usize) -> Vec<String> {
        let lines: Vec<&str> = self.text.lines().collect();
        lines.chunks(max_lines.max(1)).map(|group| group.join("\n")).collect()
    }

    /// Standalone body for part `part` of `total` of a split file.
    pub fn render_part(&self, content: &str, part: usize, total: usize) -> String {
        format!(
            "{} is large; emitting part {part}/{total}.\n\n```{}\n{content}\n```\n",
            self.label, self.language
        )
    }
}
