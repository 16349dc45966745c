//! Configuration Module - TOML-based Backend Selection
//!
//! Loads and validates configuration from `config.toml`. The active
//! persistence variant, file path, and worksheet connection settings
//! are all externalized here — nothing is hardcoded in the domain
//! layer.

pub mod loader;

use serde::Deserialize;

/// Top-level application configuration.
///
/// Loaded from `config.toml` at session start. All fields are
/// validated before any backend is constructed.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Backend selection and logging.
    pub store: StoreConfig,
    /// Local file backend settings.
    #[serde(default)]
    pub local: LocalConfig,
    /// Remote worksheet backend settings. Required when
    /// `store.backend = "sheet"`.
    pub sheet: Option<SheetConfig>,
}

/// Which persistence variant is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Delimited file on local disk.
    Local,
    /// Remote spreadsheet worksheet.
    Sheet,
}

/// Backend selection and session logging.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Active persistence variant.
    pub backend: BackendKind,
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Local file backend settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LocalConfig {
    /// Path of the CSV data file.
    #[serde(default = "default_data_path")]
    pub path: String,
}

impl Default for LocalConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
        }
    }
}

/// Remote worksheet backend settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SheetConfig {
    /// Base URL of the spreadsheet values API.
    pub base_url: String,
    /// Worksheet (tab) name holding the table.
    pub worksheet: String,
    /// Bearer token; empty for unauthenticated access.
    #[serde(default)]
    pub api_token: String,
    /// Read snapshot lifetime in seconds.
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_seconds: u64,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

// Default value functions for serde

fn default_log_level() -> String {
    "info".to_string()
}

fn default_data_path() -> String {
    "data/fg_indeksai.csv".to_string()
}

fn default_cache_ttl() -> u64 {
    5
}

fn default_timeout() -> u64 {
    30
}
