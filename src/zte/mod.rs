//! ZTE router integration module
//!
//! - `client`: fixed station list request and response parsing
//! - `scanner`: stateful presence scanner for one router

pub mod client;
pub mod scanner;

pub use scanner::RouterClientScanner;

use crate::config::Config;
use crate::error::ScanError;

/// Validate the configuration and build a scanner for it
pub async fn get_scanner(config: &Config) -> Result<RouterClientScanner, ScanError> {
    config.scanner.validate()?;
    RouterClientScanner::new(config.scanner.clone()).await
}
