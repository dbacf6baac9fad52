use std::net::SocketAddr;

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use msgapi_core::error::{MsgApiError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub app: AppSection,

    #[serde(default)]
    pub logging: LoggingSection,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            app: AppSection::default(),
            logging: LoggingSection::default(),
        }
    }
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(MsgApiError::UnsupportedVersion);
        }

        self.server.validate()?;
        self.app.validate()?;
        self.logging.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            MsgApiError::InvalidConfig(format!(
                "server.listen must be a valid socket address ({}): {e}",
                self.listen
            ))
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppSection {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_version")]
    pub version: String,

    #[serde(default = "default_description")]
    pub description: String,
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            name: default_name(),
            version: default_version(),
            description: default_description(),
        }
    }
}

impl AppSection {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(MsgApiError::InvalidConfig("app.name must not be empty".into()));
        }
        if self.version.trim().is_empty() {
            return Err(MsgApiError::InvalidConfig("app.version must not be empty".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingSection {
    /// `EnvFilter` directive, e.g. `info` or `msgapi_server=debug,info`.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl LoggingSection {
    pub fn validate(&self) -> Result<()> {
        EnvFilter::try_new(&self.level).map(|_| ()).map_err(|e| {
            MsgApiError::InvalidConfig(format!("logging.level is not a valid filter: {e}"))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8000".into()
}
fn default_name() -> String {
    "Message API".into()
}
fn default_version() -> String {
    "1.0.0".into()
}
fn default_description() -> String {
    "A simple API for managing short text messages".into()
}
fn default_level() -> String {
    "info".into()
}
