//! RouterClientScanner: presence scanner for a single ZTE router
//!
//! Keeps the last successful station list. A failed scan never clears it.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::ScannerConfig;
use crate::error::ScanError;
use crate::tracker::DeviceScanner;
use crate::zte::client::{fetch_station_list, StationListRequest};

pub struct RouterClientScanner {
    host: String,
    request: StationListRequest,
    http_client: Client,
    timeout: Duration,
    last_results: HashMap<String, Option<String>>,
    success_init: bool,
}

impl RouterClientScanner {
    /// Build the scanner and run the first scan.
    ///
    /// Only an unusable host or HTTP client fails construction; the outcome of
    /// the first scan is reported by [`success_init`](Self::success_init).
    pub async fn new(config: ScannerConfig) -> Result<Self, ScanError> {
        let request = StationListRequest::new(&config.host)?;
        let timeout = config.timeout();

        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ScanError::Transport)?;

        let mut scanner = Self {
            host: config.host,
            request,
            http_client,
            timeout,
            last_results: HashMap::new(),
            success_init: false,
        };

        scanner.success_init = scanner.update_info().await;
        if !scanner.success_init {
            tracing::warn!("[ZTE] Initial scan of {} failed", scanner.host);
        }

        Ok(scanner)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Whether the scan run during construction succeeded
    pub fn success_init(&self) -> bool {
        self.success_init
    }

    pub fn last_results(&self) -> &HashMap<String, Option<String>> {
        &self.last_results
    }

    /// One fetch attempt. Replaces the results on success, keeps them otherwise.
    pub async fn update_info(&mut self) -> bool {
        tracing::info!("[ZTE] Scanning {}", self.host);

        match fetch_station_list(&self.http_client, &self.request, self.timeout).await {
            Ok(results) => {
                tracing::debug!(
                    "[ZTE] {} reported {} stations",
                    self.host,
                    results.len()
                );
                self.last_results = results;
                true
            }
            Err(e) => {
                self.log_failure(&e);
                false
            }
        }
    }

    fn log_failure(&self, err: &ScanError) {
        match err {
            ScanError::MalformedResponse { reason, body } => {
                tracing::error!(
                    "[ZTE] Failed to parse response from {} ({}): {}",
                    self.host,
                    reason,
                    body
                );
            }
            ScanError::AuthenticationRequired => {
                tracing::error!(
                    "[ZTE] Failed to authenticate with {}, authentication is not supported",
                    self.host
                );
            }
            ScanError::UnhandledStatus(status) => {
                tracing::error!("[ZTE] Unexpected status {} from {}", status, self.host);
            }
            ScanError::Timeout(timeout) => {
                tracing::error!(
                    "[ZTE] Connection to {} timed out after {}s",
                    self.host,
                    timeout.as_secs()
                );
            }
            e if e.is_connect() => {
                tracing::error!("[ZTE] Failed to connect to {}: {}", self.host, e);
            }
            e => {
                tracing::error!("[ZTE] Request to {} failed: {}", self.host, e);
            }
        }
    }
}

#[async_trait]
impl DeviceScanner for RouterClientScanner {
    async fn scan_devices(&mut self) -> Vec<String> {
        self.update_info().await;
        self.last_results.keys().cloned().collect()
    }

    fn get_device_name(&self, device: &str) -> Option<String> {
        self.last_results.get(device).cloned().flatten()
    }
}
