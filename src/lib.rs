//! vibe-pack: pack project files into line-bounded chunks for LLM chats
//!
//! This library collects and filters files under one or more targets,
//! renders each with metadata and a language-tagged fence, and packs the
//! results into numbered chunks that respect a line budget.

pub mod chunk;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod render;
pub mod scan;
pub mod utils;

pub use error::{PackError, Result};
