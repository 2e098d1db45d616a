//! Configuration for the bookstore CLI.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (BOOKSTORE_NAME)
//! 2. Config file (.bookstore/config.yaml)
//! 3. Defaults (name "BookStore", no configured items)
//!
//! Config file discovery:
//! - Searches current directory and parents for .bookstore/config.yaml
//! - Falls back to ~/.bookstore/config.yaml

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::library::Catalog;
use crate::literature::Literature;

/// Store name used when neither env nor config file sets one
pub const DEFAULT_STORE_NAME: &str = "BookStore";

/// Environment variable overriding the store name
pub const NAME_ENV: &str = "BOOKSTORE_NAME";

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub store: StoreConfig,
    /// Initial catalog items, validated while parsing
    #[serde(default)]
    pub items: Vec<Literature>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreConfig {
    pub name: Option<String>,
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Store name for the catalog
    pub name: String,
    /// Items listed in the config file (may be empty)
    pub items: Vec<Literature>,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl ResolvedConfig {
    /// Build a catalog from the configured name and items
    pub fn catalog(&self) -> Result<Catalog> {
        Catalog::new(self.name.clone(), self.items.iter().cloned())
            .with_context(|| format!("Invalid store name: {:?}", self.name))
    }
}

/// Find config file by searching `start` and its parents
fn find_config_file_from(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let config_path = current.join(".bookstore").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Find config file in the current directory tree, then the home directory
fn find_config_file() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd).or_else(|| {
        let home_config = dirs::home_dir()?.join(".bookstore").join("config.yaml");
        home_config.exists().then_some(home_config)
    })
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Merge env, file and defaults
fn resolve(config_file: Option<PathBuf>, env_name: Option<String>) -> Result<ResolvedConfig> {
    let (file_name, items) = match config_file {
        Some(ref path) => {
            let config = load_config_file(path)?;
            debug!(path = %path.display(), items = config.items.len(), "Loaded config file");
            (config.store.name, config.items)
        }
        None => (None, Vec::new()),
    };

    let name = env_name
        .or(file_name)
        .unwrap_or_else(|| DEFAULT_STORE_NAME.to_string());

    Ok(ResolvedConfig {
        name,
        items,
        config_file,
    })
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    resolve(find_config_file(), std::env::var(NAME_ENV).ok())
}

/// Load configuration from an explicit config file path
pub fn load_config_from(path: &Path) -> Result<ResolvedConfig> {
    resolve(Some(path.to_path_buf()), std::env::var(NAME_ENV).ok())
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| format!("{:#}", e)));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}
