//! Service config loader (strict parsing).

pub mod schema;

use std::fs;
use std::io::ErrorKind;

use msgapi_core::error::{MsgApiError, Result};

pub use schema::{AppSection, LoggingSection, ServerSection, ServiceConfig};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "MSGAPI_CONFIG";
/// Config file used when `MSGAPI_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "msgapi.yaml";

pub fn load_from_file(path: &str) -> Result<ServiceConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| MsgApiError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServiceConfig> {
    let cfg: ServiceConfig = serde_yaml::from_str(s)
        .map_err(|e| MsgApiError::InvalidConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Like [`load_from_file`], but a missing file yields the defaults.
/// Returns whether the file was found alongside the config.
pub fn load_or_default(path: &str) -> Result<(ServiceConfig, bool)> {
    match fs::read_to_string(path) {
        Ok(s) => Ok((load_from_str(&s)?, true)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok((ServiceConfig::default(), false)),
        Err(e) => Err(MsgApiError::Internal(format!("read config failed: {e}"))),
    }
}

/// Config path from `MSGAPI_CONFIG`, falling back to `msgapi.yaml`.
pub fn config_path() -> String {
    std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}
