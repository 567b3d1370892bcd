//! Layered config loading: defaults, then `vibe.toml`, then `VIBE_*` environment.

use crate::domain::{Config, CONFIG_FILE_NAME};
use crate::error::{PackError, Result};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use std::path::Path;
use tracing::debug;

/// Scalar keys that may be overridden from the environment.
const ENV_KEYS: &[&str] =
    &["output_dir", "chunk_multiplier", "use_git", "include_file_list", "quiet"];

/// Load configuration anchored at `cwd`.
///
/// An explicit `config_path` must exist; otherwise `vibe.toml` in `cwd` is
/// read when present.
pub fn load_config(cwd: &Path, config_path: Option<&Path>) -> Result<Config> {
    let file = match config_path {
        Some(path) => {
            let path = if path.is_absolute() { path.to_path_buf() } else { cwd.join(path) };
            if !path.is_file() {
                return Err(PackError::MissingConfig(path));
            }
            Some(path)
        }
        None => {
            let candidate = cwd.join(CONFIG_FILE_NAME);
            candidate.is_file().then_some(candidate)
        }
    };

    let mut figment = Figment::from(Serialized::defaults(Config::default()));
    if let Some(path) = &file {
        debug!("Loading config from {}", path.display());
        figment = figment.merge(Toml::file(path));
    }
    figment = figment.merge(Env::prefixed("VIBE_").only(ENV_KEYS));

    let config: Config = figment.extract()?;
    if config.chunk_multiplier == Some(0) {
        return Err(PackError::ZeroMultiplier);
    }
    Ok(config)
}
