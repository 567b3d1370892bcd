//! Destinations for the header and chunk bodies.

use crate::error::{PackError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// File name for part `index`: `000.txt` is the header, chunks start at `001.txt`.
pub fn part_file_name(index: usize) -> String {
    format!("{index:03}.txt")
}

/// Receives numbered output parts.
pub trait ChunkSink {
    fn write_part(&mut self, index: usize, body: &str) -> Result<()>;
}

/// Writes each part to its own file in a freshly prepared directory.
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Delete `dir` if present and recreate it empty.
    pub fn recreate(dir: &Path) -> Result<Self> {
        let dir_err = |source| PackError::OutputDir { path: dir.to_path_buf(), source };
        if dir.exists() {
            fs::remove_dir_all(dir).map_err(dir_err)?;
        }
        fs::create_dir_all(dir).map_err(dir_err)?;
        Ok(Self { dir: dir.to_path_buf() })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ChunkSink for DirectorySink {
    fn write_part(&mut self, index: usize, body: &str) -> Result<()> {
        let path = self.dir.join(part_file_name(index));
        fs::write(&path, body).map_err(|source| PackError::Write { path, source })
    }
}

/// Writes every part to one stream, each preceded by a `===== NNN.txt =====` banner.
pub struct WriterSink<W: Write> {
    out: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ChunkSink for WriterSink<W> {
    fn write_part(&mut self, index: usize, body: &str) -> Result<()> {
        write!(self.out, "===== {} =====\n{body}", part_file_name(index)).map_err(PackError::Stdout)
    }
}
