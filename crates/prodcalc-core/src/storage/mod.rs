mod config;

pub use config::Config;

use std::path::PathBuf;

use crate::error::ConfigError;

/// Environment variable pointing at an explicit configuration directory.
pub const CONFIG_DIR_ENV: &str = "PRODCALC_CONFIG_DIR";

/// Returns the configuration directory.
///
/// `$PRODCALC_CONFIG_DIR` wins when set. Otherwise `~/.config/prodcalc[-dev]/`
/// based on PRODCALC_ENV; set PRODCALC_ENV=dev to use the development
/// directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os(CONFIG_DIR_ENV) {
        Some(explicit) if !explicit.is_empty() => PathBuf::from(explicit),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("PRODCALC_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("prodcalc-dev")
            } else {
                base_dir.join("prodcalc")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|source| ConfigError::DirUnavailable {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
