//! Viewer configuration, read from an optional TOML file.
//!
//! Nothing here is ever written back: the viewer keeps no state between
//! sessions. A missing file yields defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::icons::IconStyle;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
    /// Log file. Without one the terminal viewer does not log at all.
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    /// Input poll interval of the terminal loop.
    pub tick_rate_ms: u64,
    pub show_welcome: bool,
    pub icons: IconStyle,
    pub log: LogConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            show_welcome: true,
            icons: IconStyle::Unicode,
            log: LogConfig::default(),
        }
    }
}

impl ViewerConfig {
    /// `<config_dir>/aiethics/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("aiethics").join("config.toml"))
    }

    /// Load from `path`. A missing file is not an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Poll interval, clamped to at least 10ms.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(ViewerConfig::from_toml("").unwrap(), ViewerConfig::default());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let cfg = ViewerConfig::from_toml(
            r#"
            icons = "ascii"

            [log]
            file = "/tmp/aiethics.log"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.icons, IconStyle::Ascii);
        assert_eq!(cfg.log.file.as_deref(), Some(Path::new("/tmp/aiethics.log")));
        assert_eq!(cfg.log.level, "info");
        assert_eq!(cfg.tick_rate_ms, 100);
        assert!(cfg.show_welcome);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(ViewerConfig::from_toml("start_panel = \"part3\"").is_err());
    }

    #[test]
    fn bad_icon_style_is_rejected() {
        assert!(ViewerConfig::from_toml("icons = \"emoji\"").is_err());
    }

    #[test]
    fn tick_rate_floor() {
        let cfg = ViewerConfig {
            tick_rate_ms: 0,
            ..ViewerConfig::default()
        };
        assert_eq!(cfg.tick_rate(), Duration::from_millis(10));
    }

    #[test]
    fn missing_file_returns_defaults() {
        let cfg = ViewerConfig::load(Path::new("/nonexistent/aiethics/config.toml")).unwrap();
        assert_eq!(cfg, ViewerConfig::default());
    }

    #[test]
    fn corrupt_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not valid toml {{{").unwrap();

        match ViewerConfig::load(&path) {
            Err(ConfigError::Parse { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn unreadable_path_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();

        // A directory exists but cannot be read as a file.
        let err = ViewerConfig::load(dir.path()).unwrap_err();
        assert!(matches!(&err, ConfigError::Read { path, .. } if path == dir.path()));
        assert!(err.to_string().starts_with("failed to read config"));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "tick_rate_ms = 250\nshow_welcome = false\n").unwrap();

        let cfg = ViewerConfig::load(&path).unwrap();
        assert_eq!(cfg.tick_rate(), Duration::from_millis(250));
        assert!(!cfg.show_welcome);
    }
}
