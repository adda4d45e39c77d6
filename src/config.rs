use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Error, Result};

pub const DEFAULT_SCAN_INTERVAL_SECS: u64 = 300;
pub const CARD_VERSION: &str = "1.1.2";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub scan_interval: Duration,
    pub card_version: String,
    /// Dashboard resource storage file; registration is skipped when unset.
    pub resources_path: Option<PathBuf>,
    /// Stop after this many polls. `None` runs until the process is stopped.
    pub max_ticks: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scan_interval: Duration::from_secs(DEFAULT_SCAN_INTERVAL_SECS),
            card_version: CARD_VERSION.to_string(),
            resources_path: None,
            max_ticks: None,
        }
    }
}

impl Config {
    /// Defaults overlaid with `WHEEL_*` environment variables. Not validated; callers
    /// apply their own overrides first and then call [`Config::validate`].
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("WHEEL_SCAN_INTERVAL_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                Error::InvalidConfig(format!("WHEEL_SCAN_INTERVAL_SECS={raw:?} is not a number"))
            })?;
            config.scan_interval = Duration::from_secs(secs);
        }
        if let Some(version) = lookup("WHEEL_CARD_VERSION") {
            config.card_version = version.trim().to_string();
        }
        if let Some(path) = lookup("WHEEL_RESOURCES_PATH") {
            if !path.trim().is_empty() {
                config.resources_path = Some(PathBuf::from(path.trim()));
            }
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.scan_interval.is_zero() {
            return Err(Error::InvalidConfig("scan interval must be positive".into()));
        }
        if self.card_version.is_empty() {
            return Err(Error::InvalidConfig("card version must not be empty".into()));
        }
        Ok(())
    }
}
