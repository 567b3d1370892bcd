//! CLI argument merging with config

use crate::domain::Config;
use std::path::PathBuf;

#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub output_dir: Option<PathBuf>,
    pub chunk_multiplier: Option<u32>,
    pub include_file_list: Option<bool>,
    pub use_git: Option<bool>,
    pub quiet: Option<bool>,
    pub ignore_masks: Option<Vec<String>>,
    pub exclude_extensions: Option<Vec<String>>,
    pub only_extensions: Option<Vec<String>>,
}

pub fn merge_cli_with_config(mut base_config: Config, cli: CliOverrides) -> Config {
    if let Some(output_dir) = cli.output_dir {
        base_config.output_dir = output_dir;
    }
    if let Some(chunk_multiplier) = cli.chunk_multiplier {
        base_config.chunk_multiplier = Some(chunk_multiplier);
    }
    if let Some(include_file_list) = cli.include_file_list {
        base_config.include_file_list = include_file_list;
    }
    if let Some(use_git) = cli.use_git {
        base_config.use_git = use_git;
    }
    if let Some(quiet) = cli.quiet {
        base_config.quiet = quiet;
    }

    if let Some(ignore_masks) = cli.ignore_masks {
        base_config.ignore_masks = ignore_masks;
    }
    if let Some(exclude_extensions) = cli.exclude_extensions {
        base_config.exclude_extensions = exclude_extensions;
    }
    if let Some(only_extensions) = cli.only_extensions {
        base_config.only_extensions = only_extensions;
    }

    base_config
}

#[cfg(test)]
mod tests {
    use super::{merge_cli_with_config, CliOverrides};
    use crate::domain::Config;
    use std::path::PathBuf;

    #[test]
    fn cli_overrides_replace_base_values() {
        let base = Config {
            output_dir: PathBuf::from("packs"),
            chunk_multiplier: Some(4),
            ignore_masks: vec!["*.log".to_string()],
            use_git: true,
            ..Config::default()
        };

        let cli = CliOverrides {
            chunk_multiplier: Some(1),
            ignore_masks: Some(vec!["temp*".to_string()]),
            only_extensions: Some(vec!["py".to_string()]),
            ..CliOverrides::default()
        };

        let merged = merge_cli_with_config(base, cli);
        assert_eq!(merged.output_dir, PathBuf::from("packs"));
        assert_eq!(merged.chunk_multiplier, Some(1));
        assert_eq!(merged.ignore_masks, vec!["temp*".to_string()]);
        assert_eq!(merged.only_extensions, vec!["py".to_string()]);
        assert!(merged.use_git);
    }
}
