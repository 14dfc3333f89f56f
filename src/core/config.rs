//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.bibliotheque/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! Nothing about the library itself is ever written to disk.

use log::{debug, info, warn};
use serde::Deserialize;
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::YearPolicy;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct BibliothequeConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeneralConfig {
    pub year_policy: Option<YearPolicy>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DisplayConfig {
    pub rule_width: Option<usize>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_RULE_WIDTH: usize = 30;
pub const MAX_RULE_WIDTH: usize = 200;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

pub const ENV_YEAR_POLICY: &str = "BIBLIOTHEQUE_YEAR_POLICY";
pub const ENV_RULE_WIDTH: &str = "BIBLIOTHEQUE_RULE_WIDTH";
pub const ENV_LOG_LEVEL: &str = "BIBLIOTHEQUE_LOG_LEVEL";

const CONFIG_RULE_WIDTH: &str = "display.rule_width";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub year_policy: YearPolicy,
    pub rule_width: usize,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            year_policy: YearPolicy::default(),
            rule_width: DEFAULT_RULE_WIDTH,
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    InvalidValue { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::InvalidValue { key, value } => {
                write!(f, "invalid value for {key}: '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.bibliotheque/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".bibliotheque").join("config.toml"))
}

/// Load config from `path`, or from `~/.bibliotheque/config.toml` when `None`.
///
/// If the default file doesn't exist, generates a commented-out default and
/// returns `BibliothequeConfig::default()`. An explicit path that doesn't exist
/// is an I/O error. A file that exists but is malformed returns `ConfigError::Parse`.
pub fn load_config(path: Option<&Path>) -> Result<BibliothequeConfig, ConfigError> {
    let path = match path {
        Some(p) => return read_config(p),
        None => match config_path() {
            Some(p) => p,
            None => {
                warn!("Could not determine home directory, using default config");
                return Ok(BibliothequeConfig::default());
            }
        },
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(BibliothequeConfig::default());
    }

    read_config(&path)
}

fn read_config(path: &Path) -> Result<BibliothequeConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: BibliothequeConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Bibliotheque Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# year_policy = "reprompt"   # "reprompt" asks again, "abort" ends the session
#                            # Or set BIBLIOTHEQUE_YEAR_POLICY

# [display]
# rule_width = 30            # Width of the dashed rule between listed books
#                            # Or set BIBLIOTHEQUE_RULE_WIDTH
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_year_policy` is from the `--year-policy` flag (None = not specified).
pub fn resolve(config: &BibliothequeConfig, cli_year_policy: Option<YearPolicy>) -> ResolvedConfig {
    resolve_with_env(config, cli_year_policy, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
///
/// Unparsable or out-of-range values are logged and skipped so the next layer down applies.
pub fn resolve_with_env(
    config: &BibliothequeConfig,
    cli_year_policy: Option<YearPolicy>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Year policy: CLI → env → config → default
    let year_policy = cli_year_policy
        .or_else(|| env_value(&env, ENV_YEAR_POLICY, parse_year_policy))
        .or(config.general.year_policy)
        .unwrap_or_default();

    // Rule width: env → config → default
    let rule_width = env_value(&env, ENV_RULE_WIDTH, parse_rule_width)
        .or_else(|| {
            let width = config.display.rule_width?;
            check_rule_width(CONFIG_RULE_WIDTH, width)
                .map_err(|e| warn!("Ignoring config value: {}", e))
                .ok()
        })
        .unwrap_or(DEFAULT_RULE_WIDTH);

    ResolvedConfig {
        year_policy,
        rule_width,
    }
}

/// Resolve the log level: CLI → env → default. Unparsable values fall back to the default.
pub fn resolve_log_level(cli_level: Option<&str>) -> LevelFilter {
    resolve_log_level_with_env(cli_level, |key| std::env::var(key).ok())
}

pub fn resolve_log_level_with_env(
    cli_level: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> LevelFilter {
    cli_level
        .map(str::to_string)
        .or_else(|| env(ENV_LOG_LEVEL))
        .and_then(|level| level.trim().parse::<LevelFilter>().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

fn env_value<T>(
    env: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    parse: fn(&'static str, &str) -> Result<T, ConfigError>,
) -> Option<T> {
    let raw = env(key)?;
    match parse(key, &raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring environment variable: {}", e);
            None
        }
    }
}

fn parse_year_policy(key: &'static str, raw: &str) -> Result<YearPolicy, ConfigError> {
    <YearPolicy as clap::ValueEnum>::from_str(raw.trim(), true).map_err(|_| {
        ConfigError::InvalidValue {
            key,
            value: raw.to_string(),
        }
    })
}

fn parse_rule_width(key: &'static str, raw: &str) -> Result<usize, ConfigError> {
    let width = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })?;
    check_rule_width(key, width)
}

/// The rule is repeated on every listed book, so its width stays bounded.
fn check_rule_width(key: &'static str, width: usize) -> Result<usize, ConfigError> {
    if width > MAX_RULE_WIDTH {
        return Err(ConfigError::InvalidValue {
            key,
            value: width.to_string(),
        });
    }
    Ok(width)
}
