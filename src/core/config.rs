//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.stockpile/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StockpileConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub data_file: Option<String>,
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub currency_symbol: Option<String>,
    pub sidebar_width: Option<u16>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_DATA_FILE: &str = "inventory.json";
pub const DEFAULT_LOG_FILE: &str = "stockpile.log";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";
pub const DEFAULT_SIDEBAR_WIDTH: u16 = 25;
/// Narrower than this and the menu labels no longer fit.
pub const MIN_SIDEBAR_WIDTH: u16 = 18;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub data_file: PathBuf,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    pub display: DisplaySettings,
}

/// The subset of configuration the views need while drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySettings {
    pub currency_symbol: String,
    pub sidebar_width: u16,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            sidebar_width: DEFAULT_SIDEBAR_WIDTH,
        }
    }
}

/// Values supplied on the command line (None = not specified).
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub data_file: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub log_level: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.stockpile/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".stockpile").join("config.toml"))
}

/// Load config from `~/.stockpile/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `StockpileConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<StockpileConfig, ConfigError> {
    let Some(path) = config_path() else {
        warn!("Could not determine home directory, using default config");
        return Ok(StockpileConfig::default());
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<StockpileConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(StockpileConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: StockpileConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Stockpile Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# data_file = "inventory.json"     # Or set STOCKPILE_DATA
# log_file = "stockpile.log"
# log_level = "info"               # "off", "error", "warn", "info", "debug", "trace"
#                                  # Or set STOCKPILE_LOG

# [display]
# currency_symbol = "$"
# sidebar_width = 25
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &StockpileConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &StockpileConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Data file: CLI → env → config → default
    let data_file = cli
        .data_file
        .clone()
        .or_else(|| env("STOCKPILE_DATA").map(PathBuf::from))
        .or_else(|| config.general.data_file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

    // Log file: CLI → config → default
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| config.general.log_file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    // Log level: CLI → env → config → info. Unknown names fall back to info.
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| env("STOCKPILE_LOG"))
        .or_else(|| config.general.log_level.clone())
        .and_then(|name| LevelFilter::from_str(&name).ok())
        .unwrap_or(LevelFilter::Info);

    let sidebar_width = config
        .display
        .sidebar_width
        .unwrap_or(DEFAULT_SIDEBAR_WIDTH)
        .max(MIN_SIDEBAR_WIDTH);

    ResolvedConfig {
        data_file,
        log_file,
        log_level,
        display: DisplaySettings {
            currency_symbol: config
                .display
                .currency_symbol
                .clone()
                .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string()),
            sidebar_width,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&StockpileConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.data_file, PathBuf::from(DEFAULT_DATA_FILE));
        assert_eq!(resolved.log_file, PathBuf::from(DEFAULT_LOG_FILE));
        assert_eq!(resolved.log_level, LevelFilter::Info);
        assert_eq!(resolved.display, DisplaySettings::default());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = StockpileConfig {
            general: GeneralConfig {
                data_file: Some("/tmp/stock.json".to_string()),
                log_file: Some("/tmp/stock.log".to_string()),
                log_level: Some("debug".to_string()),
            },
            display: DisplayConfig {
                currency_symbol: Some("₡".to_string()),
                sidebar_width: Some(30),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.data_file, PathBuf::from("/tmp/stock.json"));
        assert_eq!(resolved.log_level, LevelFilter::Debug);
        assert_eq!(resolved.display.currency_symbol, "₡");
        assert_eq!(resolved.display.sidebar_width, 30);
    }

    #[test]
    fn test_env_beats_config_and_cli_beats_env() {
        let config = StockpileConfig {
            general: GeneralConfig {
                data_file: Some("from-config.json".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = |key: &str| (key == "STOCKPILE_DATA").then(|| "from-env.json".to_string());

        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.data_file, PathBuf::from("from-env.json"));

        let cli = CliOverrides {
            data_file: Some(PathBuf::from("from-cli.json")),
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &cli, env);
        assert_eq!(resolved.data_file, PathBuf::from("from-cli.json"));
    }

    #[test]
    fn test_sidebar_width_has_a_floor() {
        let config = StockpileConfig {
            display: DisplayConfig {
                sidebar_width: Some(3),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.display.sidebar_width, MIN_SIDEBAR_WIDTH);
    }

    #[test]
    fn test_unknown_log_level_falls_back_to_info() {
        let cli = CliOverrides {
            log_level: Some("loud".to_string()),
            ..Default::default()
        };
        let resolved = resolve_with_env(&StockpileConfig::default(), &cli, no_env);
        assert_eq!(resolved.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[display]
currency_symbol = "€"
"#;
        let config: StockpileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.display.currency_symbol.as_deref(), Some("€"));
        assert!(config.general.data_file.is_none());
        assert!(config.display.sidebar_width.is_none());
    }

    #[test]
    fn test_missing_file_generates_commented_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = load_config_from(&path).unwrap();
        assert!(config.general.data_file.is_none());

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("# [general]"));
        // Everything is commented out, so it parses back to defaults.
        let reparsed = load_config_from(&path).unwrap();
        assert!(reparsed.display.currency_symbol.is_none());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[display\nsidebar_width = ").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
    }
}
