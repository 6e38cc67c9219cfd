//! Configuration module

use std::time::Duration;

use serde::Deserialize;

use crate::error::ScanError;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub scanner: ScannerConfig,
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScannerConfig {
    /// Router hostname or IP, without scheme
    pub host: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl ScannerConfig {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            timeout_secs: default_timeout(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ScanError> {
        if self.host.trim().is_empty() {
            return Err(ScanError::Config("scanner.host is required".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(ScanError::Config(
                "scanner.timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_timeout() -> u64 {
    60
}

fn default_poll_interval() -> u64 {
    12
}

impl Config {
    pub fn load() -> Result<Self, ScanError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::Environment::with_prefix("ZTETRACKER").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ScanError> {
        self.scanner.validate()?;
        if self.poll_interval_secs == 0 {
            return Err(ScanError::Config(
                "poll_interval_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}
