// src/config.rs

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{MonitorError, Result};

pub const DEFAULT_CHECK_INTERVAL_MS: u64 = 3_600_000;
pub const DEFAULT_CORP_ID: &str = "98735707";
pub const DEFAULT_DATA_DIR: &str = "data";

/// Value shipped in the example .env; treated the same as unset.
pub const WEBHOOK_PLACEHOLDER: &str = "your_webhook_url_here";

/// Runtime configuration, read from the environment once at startup and
/// passed explicitly into the reconciler. The core never reads the
/// environment itself.
#[derive(Clone, Debug)]
pub struct Config {
    pub discord_webhook_url: Option<String>,
    pub check_interval_ms: u64,
    pub corp_id: String,
    pub data_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let check_interval_ms = env::var("CHECK_INTERVAL_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_CHECK_INTERVAL_MS);

        Self {
            discord_webhook_url: env::var("DISCORD_WEBHOOK_URL").ok(),
            check_interval_ms,
            corp_id: env::var("CORP_ID").unwrap_or_else(|_| DEFAULT_CORP_ID.to_string()),
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR)),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.check_interval_ms == 0 {
            return Err(MonitorError::Config(
                "CHECK_INTERVAL_MS must be greater than 0".into(),
            ));
        }
        if self.corp_id.trim().is_empty() {
            return Err(MonitorError::Config("CORP_ID must not be empty".into()));
        }
        Ok(())
    }

    pub fn check_interval(&self) -> Duration {
        Duration::from_millis(self.check_interval_ms)
    }

    /// The webhook URL to deliver to, or `None` when delivery is disabled
    /// (unset, empty, or still the placeholder from the example .env).
    pub fn webhook_target(&self) -> Option<&str> {
        match self.discord_webhook_url.as_deref() {
            Some(url) if !url.is_empty() && url != WEBHOOK_PLACEHOLDER => Some(url),
            _ => None,
        }
    }
}
