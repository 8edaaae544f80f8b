//! Configuration support
//!
//! Loads CLI defaults from a `promptforge.toml` file in the working
//! directory:
//!
//! ```toml
//! # promptforge.toml
//! output_format = "json"
//! verbose = true
//! ```
//!
//! A missing or malformed file falls back to defaults so the tool never
//! refuses to run over configuration.

use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

/// Name of the config file searched for in the working directory.
pub const CONFIG_FILE: &str = "promptforge.toml";

/// CLI defaults, overridable per invocation by command-line flags.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Default output format: "text", "json", or "csv".
    pub output_format: String,

    /// Show per-dimension feedback in terminal output by default.
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: "text".to_string(),
            verbose: false,
        }
    }
}

/// Load configuration from `promptforge.toml` in `dir`.
///
/// Returns defaults when the file is absent; logs a warning and returns
/// defaults when it exists but cannot be read or parsed.
pub fn load_config(dir: &Path) -> Config {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        debug!("No config found at {}, using defaults", path.display());
        return Config::default();
    }

    match load_toml_config(&path) {
        Ok(config) => {
            debug!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            warn!("Failed to load {}: {}", path.display(), e);
            Config::default()
        }
    }
}

fn load_toml_config(path: &Path) -> anyhow::Result<Config> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults_when_missing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = load_config(dir.path());
        assert_eq!(config, Config::default());
        assert_eq!(config.output_format, "text");
        assert!(!config.verbose);
    }

    #[test]
    fn test_loads_toml_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(
            dir.path().join(CONFIG_FILE),
            "output_format = \"json\"\nverbose = true\n",
        )
        .expect("write config");
        let config = load_config(dir.path());
        assert_eq!(config.output_format, "json");
        assert!(config.verbose);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join(CONFIG_FILE), "verbose = true\n").expect("write config");
        let config = load_config(dir.path());
        assert_eq!(config.output_format, "text");
        assert!(config.verbose);
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join(CONFIG_FILE), "output_format = [not toml").expect("write config");
        assert_eq!(load_config(dir.path()), Config::default());
    }

    #[test]
    fn test_unknown_key_rejected_not_silently_ignored() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join(CONFIG_FILE), "output_fmt = \"json\"\n").expect("write config");
        // Typoed keys fail parsing, which falls back to defaults with a
        // logged warning rather than quietly dropping the setting.
        assert_eq!(load_config(dir.path()), Config::default());
    }
}
