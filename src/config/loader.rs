//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, validating the selected backend's
//! settings, and providing clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::{AppConfig, BackendKind};

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<AppConfig> {
    let path = Path::new(path);

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: AppConfig =
        toml::from_str(&content).with_context(|| "Failed to parse config.toml")?;

    validate_config(&config)?;

    info!(
        backend = ?config.store.backend,
        "Configuration loaded successfully"
    );

    Ok(config)
}

/// Validate the settings of the selected backend.
fn validate_config(config: &AppConfig) -> Result<()> {
    match config.store.backend {
        BackendKind::Local => {
            anyhow::ensure!(
                !config.local.path.trim().is_empty(),
                "local.path must not be empty"
            );
        }
        BackendKind::Sheet => {
            let sheet = config
                .sheet
                .as_ref()
                .context("[sheet] section is required when store.backend = \"sheet\"")?;
            anyhow::ensure!(
                !sheet.base_url.trim().is_empty(),
                "sheet.base_url must not be empty"
            );
            anyhow::ensure!(
                !sheet.worksheet.trim().is_empty(),
                "sheet.worksheet must not be empty"
            );
            anyhow::ensure!(
                sheet.timeout_seconds > 0,
                "sheet.timeout_seconds must be positive, got {}",
                sheet.timeout_seconds
            );
        }
    }

    Ok(())
}
