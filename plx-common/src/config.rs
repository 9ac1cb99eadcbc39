//! Configuration resolution for PLX modules
//!
//! Per-field priority order:
//! 1. Command-line argument (applied by the binary, highest priority)
//! 2. Environment variable (`PLX_*`)
//! 3. TOML config file (`~/.config/plx/<module>.toml`)
//! 4. Compiled default (fallback)
//!
//! A missing or unreadable config file never prevents startup: the resolver
//! logs a warning and continues with the remaining tiers.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{info, warn};

/// Compiled default listen port for plx-ui
pub const DEFAULT_LISTEN_PORT: u16 = 5740;
/// Compiled default placement scoring endpoint
pub const DEFAULT_PLACEMENT_URL: &str =
    "https://repersonalize.jewelml.io/c/p/67fd95260740ccc4ec658d03/l";
/// Compiled default item identifier shown as the worked example
pub const DEFAULT_ITEM_ID: &str = "1177646331_multicolor";
/// Compiled default recommendation model
pub const DEFAULT_MODEL: &str = "B_prod";
/// Compiled default minimum item count requested from the placement API
pub const DEFAULT_MINIMUM_ITEMS: u32 = 2;
/// Compiled default result-set size requested from the placement API
pub const DEFAULT_NUMBER_OF_PLACEMENTS: u32 = 20;

/// Resolved module configuration
///
/// Every tunable the service uses lives here as a named field; handlers and
/// clients never reach for inline literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlxConfig {
    /// TCP port the HTTP server binds to
    pub listen_port: u16,
    /// Base URL of the upstream placement scoring endpoint
    pub placement_url: String,
    /// Item identifier used when none is supplied with the request
    pub default_item_id: String,
    /// Model identifier used when none is supplied with the request
    pub default_model: String,
    /// Static `minimum_items` tuning parameter sent with every placement call
    pub minimum_items: u32,
    /// Static `number_of_placements` tuning parameter sent with every placement call
    pub number_of_placements: u32,
}

impl Default for PlxConfig {
    fn default() -> Self {
        Self {
            listen_port: DEFAULT_LISTEN_PORT,
            placement_url: DEFAULT_PLACEMENT_URL.to_string(),
            default_item_id: DEFAULT_ITEM_ID.to_string(),
            default_model: DEFAULT_MODEL.to_string(),
            minimum_items: DEFAULT_MINIMUM_ITEMS,
            number_of_placements: DEFAULT_NUMBER_OF_PLACEMENTS,
        }
    }
}

/// Raw TOML config file contents
///
/// All fields optional; absent fields fall through to the next tier.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub listen_port: Option<u16>,
    pub placement_url: Option<String>,
    pub default_item_id: Option<String>,
    pub default_model: Option<String>,
    pub minimum_items: Option<u32>,
    pub number_of_placements: Option<u32>,
}

/// Load and parse a TOML config file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let contents = std::fs::read_to_string(path)?;
    toml::from_str(&contents).map_err(|e| Error::Config(e.to_string()))
}

/// Multi-tier configuration resolver for a PLX module
pub struct ConfigResolver {
    module_name: &'static str,
    config_file: Option<PathBuf>,
}

impl ConfigResolver {
    /// Create a resolver for the named module (e.g. "plx-ui")
    pub fn new(module_name: &'static str) -> Self {
        Self {
            module_name,
            config_file: None,
        }
    }

    /// Use an explicit config file path instead of the platform default
    pub fn with_config_file(mut self, path: PathBuf) -> Self {
        self.config_file = Some(path);
        self
    }

    /// Resolve the effective configuration from all tiers
    ///
    /// Never fails: unreadable files and malformed values are logged and
    /// skipped, leaving the affected fields at the next tier's value.
    pub fn resolve(&self) -> PlxConfig {
        let mut config = PlxConfig::default();

        match self.config_file_path() {
            Some(path) if path.exists() => match load_toml_config(&path) {
                Ok(toml_config) => {
                    info!("Loaded configuration from {}", path.display());
                    apply_toml(&mut config, toml_config);
                }
                Err(e) => {
                    warn!("Ignoring config file {}: {}", path.display(), e);
                }
            },
            Some(path) => {
                info!("No config file at {} (using defaults)", path.display());
            }
            None => {
                warn!("Could not determine config directory (using defaults)");
            }
        }

        apply_env_overrides(&mut config);
        config
    }

    /// Path of the config file: explicit override, else
    /// `<platform config dir>/plx/<module>.toml`
    fn config_file_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.config_file {
            return Some(path.clone());
        }
        dirs::config_dir().map(|d| d.join("plx").join(format!("{}.toml", self.module_name)))
    }
}

/// Overlay TOML values onto the compiled defaults
fn apply_toml(config: &mut PlxConfig, toml_config: TomlConfig) {
    if let Some(port) = toml_config.listen_port {
        config.listen_port = port;
    }
    if let Some(url) = toml_config.placement_url {
        config.placement_url = url;
    }
    if let Some(item_id) = toml_config.default_item_id {
        config.default_item_id = item_id;
    }
    if let Some(model) = toml_config.default_model {
        config.default_model = model;
    }
    if let Some(n) = toml_config.minimum_items {
        config.minimum_items = n;
    }
    if let Some(n) = toml_config.number_of_placements {
        config.number_of_placements = n;
    }
}

/// Overlay `PLX_*` environment variables onto the config
fn apply_env_overrides(config: &mut PlxConfig) {
    if let Some(port) = env_var_parsed("PLX_LISTEN_PORT") {
        config.listen_port = port;
    }
    if let Ok(url) = std::env::var("PLX_PLACEMENT_URL") {
        config.placement_url = url;
    }
    if let Ok(item_id) = std::env::var("PLX_DEFAULT_ITEM_ID") {
        config.default_item_id = item_id;
    }
    if let Ok(model) = std::env::var("PLX_DEFAULT_MODEL") {
        config.default_model = model;
    }
    if let Some(n) = env_var_parsed("PLX_MINIMUM_ITEMS") {
        config.minimum_items = n;
    }
    if let Some(n) = env_var_parsed("PLX_NUMBER_OF_PLACEMENTS") {
        config.number_of_placements = n;
    }
}

/// Read and parse a numeric environment variable, warning on bad values
fn env_var_parsed<T: FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(
                "{}",
                Error::InvalidInput(format!("{}={} is not a valid value", name, raw))
            );
            None
        }
    }
}
