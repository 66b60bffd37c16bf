// Configuration loading and parsing (config/sorteo.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {message}")]
    ReadError { path: PathBuf, message: String },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub draw: DrawConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// The `[draw]` table: spin timing and roster seeding.
#[derive(Debug, Clone, Deserialize)]
pub struct DrawConfig {
    /// Milliseconds between roulette ticks.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// Start with a full roster of default-named players.
    #[serde(default = "default_prefill_roster")]
    pub prefill_roster: bool,
    /// Name prefix for seeded players ("Jugador 1", "Jugador 2", ...).
    #[serde(default = "default_name_prefix")]
    pub default_name_prefix: String,
}

/// The `[log]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Tracing filter directive, overridable via RUST_LOG.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_tick_interval_ms() -> u64 {
    crate::draw::engine::DEFAULT_TICK_INTERVAL_MS
}

fn default_prefill_roster() -> bool {
    true
}

fn default_name_prefix() -> String {
    "Jugador".to_string()
}

fn default_log_filter() -> String {
    "sorteo=info,warn".to_string()
}

impl Default for DrawConfig {
    fn default() -> Self {
        DrawConfig {
            tick_interval_ms: default_tick_interval_ms(),
            prefill_roster: default_prefill_roster(),
            default_name_prefix: default_name_prefix(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            filter: default_log_filter(),
        }
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate configuration from `config/sorteo.toml` relative to
/// the given `base_dir`. A missing file yields the built-in defaults; a
/// present but malformed file is an error.
pub(crate) fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join("sorteo.toml");

    let config = if path.exists() {
        let text = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
            path: path.clone(),
            message: e.to_string(),
        })?;
        toml::from_str(&text).map_err(|e| ConfigError::ParseError {
            path: path.clone(),
            source: e,
        })?
    } else {
        Config::default()
    };

    validate(&config)?;

    Ok(config)
}

/// Convenience wrapper: loads config relative to the current working directory.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|e| ConfigError::ReadError {
        path: PathBuf::from("."),
        message: e.to_string(),
    })?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.draw.tick_interval_ms == 0 {
        return Err(ConfigError::ValidationError {
            field: "draw.tick_interval_ms".into(),
            message: "must be greater than 0".into(),
        });
    }

    if config.draw.default_name_prefix.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "draw.default_name_prefix".into(),
            message: "must not be empty".into(),
        });
    }

    if config.log.filter.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "log.filter".into(),
            message: "must not be empty".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    /// Helper: creates a unique scratch directory with an optional
    /// config/sorteo.toml and returns its path.
    fn scratch_dir(name: &str, toml_text: Option<&str>) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("sorteo-config-{name}-{}", std::process::id()));
        let config_dir = dir.join("config");
        fs::create_dir_all(&config_dir).unwrap();
        if let Some(text) = toml_text {
            fs::write(config_dir.join("sorteo.toml"), text).unwrap();
        } else {
            let _ = fs::remove_file(config_dir.join("sorteo.toml"));
        }
        dir
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = scratch_dir("missing", None);
        let config = load_config_from(&dir).expect("defaults should load");
        assert_eq!(config.draw.tick_interval_ms, 400);
        assert!(config.draw.prefill_roster);
        assert_eq!(config.draw.default_name_prefix, "Jugador");
        assert_eq!(config.log.filter, "sorteo=info,warn");
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = scratch_dir(
            "partial",
            Some("[draw]\ntick_interval_ms = 150\n"),
        );
        let config = load_config_from(&dir).expect("partial config should load");
        assert_eq!(config.draw.tick_interval_ms, 150);
        assert!(config.draw.prefill_roster, "unset fields keep their defaults");
        assert_eq!(config.log.filter, "sorteo=info,warn");
    }

    #[test]
    fn full_file_overrides_everything() {
        let dir = scratch_dir(
            "full",
            Some(
                "[draw]\n\
                 tick_interval_ms = 250\n\
                 prefill_roster = false\n\
                 default_name_prefix = \"Participante\"\n\
                 \n\
                 [log]\n\
                 filter = \"sorteo=debug\"\n",
            ),
        );
        let config = load_config_from(&dir).expect("full config should load");
        assert_eq!(config.draw.tick_interval_ms, 250);
        assert!(!config.draw.prefill_roster);
        assert_eq!(config.draw.default_name_prefix, "Participante");
        assert_eq!(config.log.filter, "sorteo=debug");
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = scratch_dir("malformed", Some("[draw\ntick_interval_ms = nope"));
        let err = load_config_from(&dir).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn zero_tick_interval_is_rejected() {
        let dir = scratch_dir("zerotick", Some("[draw]\ntick_interval_ms = 0\n"));
        let err = load_config_from(&dir).unwrap_err();
        match err {
            ConfigError::ValidationError { field, .. } => {
                assert_eq!(field, "draw.tick_interval_ms");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn empty_name_prefix_is_rejected() {
        let dir = scratch_dir(
            "noprefix",
            Some("[draw]\ndefault_name_prefix = \"  \"\n"),
        );
        let err = load_config_from(&dir).unwrap_err();
        match err {
            ConfigError::ValidationError { field, .. } => {
                assert_eq!(field, "draw.default_name_prefix");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
