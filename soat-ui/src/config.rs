//! Application settings.
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! command-line overrides.
//!
//! ```toml
//! log_level = "debug"
//! log_file = "soat-quotes.log"
//! log_stdout = true
//!
//! [window]
//! width = 960.0
//! height = 720.0
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "soat-quotes.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 720.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Bare level or full `EnvFilter` directive.
    pub log_level: String,
    pub log_file: Option<PathBuf>,
    pub log_stdout: bool,
    pub window: WindowConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_file: None,
            log_stdout: true,
            window: WindowConfig::default(),
        }
    }
}

/// Command-line values that win over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
    pub quiet: bool,
}

impl AppConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `explicit` when given (it must exist). Otherwise tries
    /// [`DEFAULT_CONFIG_FILE`] and falls back to defaults when it is absent.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.exists() {
            Self::load(fallback)
        } else {
            debug!("no {DEFAULT_CONFIG_FILE} found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn apply_overrides(
        &mut self,
        overrides: ConfigOverrides,
    ) {
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
        if let Some(file) = overrides.log_file {
            self.log_file = Some(file);
        }
        if overrides.quiet {
            self.log_stdout = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn full_file_is_read() {
        let config = AppConfig::from_toml_str(
            r#"
log_level = "debug"
log_file = "quotes.log"
log_stdout = false

[window]
width = 800.0
height = 600.0
"#,
        )
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_file, Some(PathBuf::from("quotes.log")));
        assert!(!config.log_stdout);
        assert_eq!(
            config.window,
            WindowConfig {
                width: 800.0,
                height: 600.0
            }
        );
    }

    #[test]
    fn partial_window_table_keeps_other_default() {
        let config = AppConfig::from_toml_str("[window]\nwidth = 1024.0\n").unwrap();

        assert_eq!(config.window.width, 1024.0);
        assert_eq!(config.window.height, WindowConfig::default().height);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(AppConfig::from_toml_str("colour = \"blue\"").is_err());
    }

    #[test]
    fn overrides_win_over_file_values() {
        let mut config = AppConfig::from_toml_str("log_level = \"warn\"").unwrap();

        config.apply_overrides(ConfigOverrides {
            log_level: Some("trace".to_string()),
            log_file: Some(PathBuf::from("run.log")),
            quiet: true,
        });

        assert_eq!(config.log_level, "trace");
        assert_eq!(config.log_file, Some(PathBuf::from("run.log")));
        assert!(!config.log_stdout);
    }

    #[test]
    fn empty_overrides_change_nothing() {
        let mut config = AppConfig::default();

        config.apply_overrides(ConfigOverrides::default());

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let result = AppConfig::load_or_default(Some(Path::new("does/not/exist.toml")));

        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
