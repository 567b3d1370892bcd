//! vibe: pack a project into chunked text for LLM review
//!
//! Writes `.vibe/000.txt` (guidance prompt, optional file list and trees)
//! followed by `001.txt`, `002.txt`, ... with fenced file contents.

use anyhow::Result;

fn main() -> Result<()> {
    vibe_pack::cli::run()
}
