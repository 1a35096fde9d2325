//! # Configuration
//!
//! Settings for the `cluescan` binary, with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.cluescan/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! The library scanners take no configuration.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use simplelog::LevelFilter;

use crate::render::OutputFormat;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CluescanConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    pub show_enumeration: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LogConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "cluescan.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub format: OutputFormat,
    pub show_enumeration: bool,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

/// Values given on the command line; `None` means the flag was absent.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub format: Option<OutputFormat>,
    pub hide_enumeration: bool,
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

impl From<ConfigError> for std::io::Error {
    fn from(e: ConfigError) -> Self {
        match e {
            ConfigError::Io(e) => e,
            ConfigError::Parse(e) => std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.cluescan/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".cluescan").join("config.toml"))
}

/// Load config from `path`, or `~/.cluescan/config.toml` when `None`.
///
/// A missing default file is generated and treated as empty. An explicit
/// path that doesn't exist is an error. Malformed TOML returns
/// `ConfigError::Parse`.
pub fn load_config(path: Option<&Path>) -> Result<CluescanConfig, ConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => {
                if !p.exists() {
                    info!("No config file found, generating default at {}", p.display());
                    generate_default_config(&p);
                    return Ok(CluescanConfig::default());
                }
                p
            }
            None => {
                warn!("Could not determine home directory, using default config");
                return Ok(CluescanConfig::default());
            }
        },
    };

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<CluescanConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# cluescan configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [output]
# format = "text"              # "text" or "json"   (env: CLUESCAN_FORMAT)
# show_enumeration = true

# [log]
# level = "info"               # "off", "error", "warn", "info", "debug", "trace"
#                              # (env: CLUESCAN_LOG_LEVEL)
# file = "cluescan.log"        # (env: CLUESCAN_LOG_FILE)
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
pub fn resolve(config: &CluescanConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading env vars through `env`.
pub fn resolve_with_env<E>(config: &CluescanConfig, cli: &CliOverrides, env: E) -> ResolvedConfig
where
    E: Fn(&str) -> Option<String>,
{
    // Format: CLI → env → config → default
    let format = cli
        .format
        .or_else(|| env("CLUESCAN_FORMAT").and_then(|s| parse_format(&s)))
        .or(config.output.format)
        .unwrap_or_default();

    let show_enumeration =
        !cli.hide_enumeration && config.output.show_enumeration.unwrap_or(true);

    // Log level: env → config → default
    let log_level = env("CLUESCAN_LOG_LEVEL")
        .or_else(|| config.log.level.clone())
        .and_then(|s| parse_level(&s))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let log_file = env("CLUESCAN_LOG_FILE")
        .or_else(|| config.log.file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    ResolvedConfig {
        format,
        show_enumeration,
        log_level,
        log_file: PathBuf::from(log_file),
    }
}

fn parse_format(value: &str) -> Option<OutputFormat> {
    match value.trim().to_ascii_lowercase().as_str() {
        "text" => Some(OutputFormat::Text),
        "json" => Some(OutputFormat::Json),
        other => {
            warn!("Ignoring unknown output format {:?}", other);
            None
        }
    }
}

fn parse_level(value: &str) -> Option<LevelFilter> {
    match value.trim().parse() {
        Ok(level) => Some(level),
        Err(_) => {
            warn!("Ignoring unknown log level {:?}", value);
            None
        }
    }
}
