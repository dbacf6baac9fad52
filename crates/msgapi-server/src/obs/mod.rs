//! Logging setup.
//!
//! `RUST_LOG` wins when set; otherwise the configured `logging.level` is used.

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingSection;

pub fn init_tracing(cfg: &LoggingSection) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.level));
    fmt().with_env_filter(filter).init();
}
