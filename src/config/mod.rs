//! Configuration loading and CLI merging

mod load;
mod merge;

pub use load::load_config;
pub use merge::{merge_cli_with_config, CliOverrides};
