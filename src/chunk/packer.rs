//! Line-budgeted chunk packing.

use super::block::FileBlock;
use super::sink::ChunkSink;
use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// Manifest framing placed above each chunk's blocks.
const CHUNK_HEADER_LEAD: &str = "You are now being provided with the following files:\n";
const CHUNK_HEADER_TAIL: &str = concat!(
    "\n\nThis is part of the codebase. Don't take any action, just review it ",
    "and reply: \"Keep going.\"\n\n"
);

/// Aggregate results of a packing run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PackTotals {
    pub chunks: usize,
    pub lines: usize,
    pub bytes: u64,
}

/// Hard per-chunk limit: capacity plus ten percent, rounded down.
pub fn tolerance(max_lines: usize) -> usize {
    max_lines * 11 / 10
}

/// Render a chunk body: manifest of entries, then the blocks.
pub fn render_chunk(entries: &[String], blocks: &[String]) -> String {
    let list = entries.iter().map(|e| format!("- {e}")).collect::<Vec<_>>().join("\n");
    let blocks_len: usize = blocks.iter().map(String::len).sum();
    let mut body = String::with_capacity(
        CHUNK_HEADER_LEAD.len() + list.len() + CHUNK_HEADER_TAIL.len() + blocks_len,
    );
    body.push_str(CHUNK_HEADER_LEAD);
    body.push_str(&list);
    body.push_str(CHUNK_HEADER_TAIL);
    for block in blocks {
        body.push_str(block);
    }
    body
}

/// Streams files into bounded chunks delivered to a [`ChunkSink`].
pub struct ChunkPacker<'a, S: ChunkSink> {
    sink: &'a mut S,
    display_base: PathBuf,
    max_lines: usize,
    tolerance: usize,
    entries: Vec<String>,
    blocks: Vec<String>,
    current_lines: usize,
    next_index: usize,
    totals: PackTotals,
}

impl<'a, S: ChunkSink> ChunkPacker<'a, S> {
    pub fn new(sink: &'a mut S, max_lines: usize, display_base: &Path) -> Self {
        let max_lines = max_lines.max(1);
        Self {
            sink,
            display_base: display_base.to_path_buf(),
            max_lines,
            tolerance: tolerance(max_lines),
            entries: Vec::new(),
            blocks: Vec::new(),
            current_lines: 0,
            next_index: 1,
            totals: PackTotals::default(),
        }
    }

    /// Add one file; unreadable files are logged and skipped.
    pub fn push_file(&mut self, path: &Path) -> Result<()> {
        let block = match FileBlock::load(path, &self.display_base) {
            Ok(block) => block,
            Err(err) => {
                error!("Error reading {}: {err}", path.display());
                return Ok(());
            }
        };
        self.totals.lines += block.line_count;
        self.totals.bytes += block.size_bytes;

        if block.line_count > self.tolerance {
            self.flush()?;
            return self.emit_split(&block);
        }

        if !self.blocks.is_empty() && self.current_lines + block.line_count > self.tolerance {
            self.flush()?;
        }
        self.blocks.push(block.render());
        self.entries.push(block.label);
        self.current_lines += block.line_count;
        Ok(())
    }

    /// Seal the remaining chunk and return the totals.
    pub fn finish(mut self) -> Result<PackTotals> {
        self.flush()?;
        Ok(self.totals)
    }

    fn emit_split(&mut self, block: &FileBlock) -> Result<()> {
        let parts = block.split_lines(self.max_lines);
        let total = parts.len();
        debug!("Splitting {} ({} lines) into {total} parts", block.label, block.line_count);
        for (i, part) in parts.iter().enumerate() {
            let n = i + 1;
            let entry = format!("{} (part {n}/{total})", block.label);
            let body = render_chunk(&[entry], &[block.render_part(part, n, total)]);
            self.write(&body)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if self.blocks.is_empty() {
            return Ok(());
        }
        let body = render_chunk(&self.entries, &self.blocks);
        self.entries.clear();
        self.blocks.clear();
        self.current_lines = 0;
        self.write(&body)
    }

    fn write(&mut self, body: &str) -> Result<()> {
        self.sink.write_part(self.next_index, body)?;
        self.next_index += 1;
        self.totals.chunks += 1;
        Ok(())
    }
}

/// Pack `files` (already sorted and deduplicated) with capacity `max_lines`.
pub fn pack_files<S: ChunkSink>(
    files: &[PathBuf],
    max_lines: usize,
    display_base: &Path,
    sink: &mut S,
) -> Result<PackTotals> {
    let mut packer = ChunkPacker::new(sink, max_lines, display_base);
    for path in files {
        packer.push_file(path)?;
    }
    packer.finish()
}
