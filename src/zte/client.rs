//! ZTE goform client
//!
//! One fixed request against the router's web-management API. Each call is a
//! single attempt; nothing here retries or holds state between calls.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::header::{HeaderValue, REFERER};
use reqwest::{Client, StatusCode};
use url::Url;

use crate::error::ScanError;
use crate::models::StationList;

const STATION_LIST_PATH: &str = "/goform/goform_get_cmd_process?isTest=false&cmd=station_list";

/// Immutable descriptor of the station list request, reused for every scan
#[derive(Debug, Clone)]
pub struct StationListRequest {
    url: Url,
    referer: HeaderValue,
}

impl StationListRequest {
    pub fn new(host: &str) -> Result<Self, ScanError> {
        let base = format!("http://{}/", host);
        let base_url =
            Url::parse(&base).map_err(|e| ScanError::InvalidHost(format!("{}: {}", host, e)))?;

        // Rejects hosts that smuggle a path, query or credentials
        if base_url.path() != "/"
            || base_url.query().is_some()
            || base_url.fragment().is_some()
            || !base_url.username().is_empty()
            || base_url.password().is_some()
        {
            return Err(ScanError::InvalidHost(host.to_string()));
        }

        let url = Url::parse(&format!("http://{}{}", host, STATION_LIST_PATH))
            .map_err(|e| ScanError::InvalidHost(format!("{}: {}", host, e)))?;
        let referer =
            HeaderValue::from_str(&base).map_err(|_| ScanError::InvalidHost(host.to_string()))?;

        Ok(Self { url, referer })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn referer(&self) -> &HeaderValue {
        &self.referer
    }

    fn build(&self, client: &Client, timeout: Duration) -> reqwest::RequestBuilder {
        client
            .get(self.url.clone())
            .header(REFERER, self.referer.clone())
            .timeout(timeout)
    }
}

/// Send the request once and reduce the body to MAC -> hostname
pub async fn fetch_station_list(
    client: &Client,
    request: &StationListRequest,
    timeout: Duration,
) -> Result<HashMap<String, Option<String>>, ScanError> {
    let response = request
        .build(client, timeout)
        .send()
        .await
        .map_err(|e| ScanError::from_request(e, timeout))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ScanError::from_request(e, timeout))?;

    match status {
        StatusCode::OK => parse_station_list(&body),
        StatusCode::UNAUTHORIZED => Err(ScanError::AuthenticationRequired),
        other => {
            tracing::debug!("[ZTE] Unexpected status {} with body: {}", other, body);
            Err(ScanError::UnhandledStatus(other))
        }
    }
}

/// Parse a 200 body. Invalid JSON and missing keys are both malformed.
pub fn parse_station_list(body: &str) -> Result<HashMap<String, Option<String>>, ScanError> {
    let list: StationList =
        serde_json::from_str(body).map_err(|e| ScanError::MalformedResponse {
            reason: e.to_string(),
            body: body.to_string(),
        })?;

    Ok(list.into_map())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let request = StationListRequest::new("192.168.0.1").unwrap();

        assert_eq!(
            request.url().as_str(),
            "http://192.168.0.1/goform/goform_get_cmd_process?isTest=false&cmd=station_list"
        );
        assert_eq!(request.referer().to_str().unwrap(), "http://192.168.0.1/");
    }

    #[test]
    fn test_request_with_port_and_hostname() {
        let request = StationListRequest::new("router.lan:8080").unwrap();

        assert_eq!(request.url().host_str(), Some("router.lan"));
        assert_eq!(request.url().port(), Some(8080));
        assert_eq!(request.url().query(), Some("isTest=false&cmd=station_list"));
        assert_eq!(request.referer().to_str().unwrap(), "http://router.lan:8080/");
    }

    #[test]
    fn test_invalid_host() {
        assert!(matches!(
            StationListRequest::new(""),
            Err(ScanError::InvalidHost(_))
        ));
        assert!(matches!(
            StationListRequest::new("router/admin"),
            Err(ScanError::InvalidHost(_))
        ));
        assert!(matches!(
            StationListRequest::new("bad host"),
            Err(ScanError::InvalidHost(_))
        ));
    }

    #[test]
    fn test_parse_station_list() {
        let map = parse_station_list(
            r#"{"station_list":[{"mac_addr":"AA:BB:CC:DD:EE:FF","hostname":"phone1"}]}"#,
        )
        .unwrap();

        assert_eq!(map.len(), 1);
        assert_eq!(map["AA:BB:CC:DD:EE:FF"].as_deref(), Some("phone1"));
    }

    #[test]
    fn test_parse_malformed_keeps_body() {
        match parse_station_list("not json") {
            Err(ScanError::MalformedResponse { body, .. }) => assert_eq!(body, "not json"),
            other => panic!("expected malformed response, got {:?}", other),
        }

        assert!(matches!(
            parse_station_list(r#"{"devices":[]}"#),
            Err(ScanError::MalformedResponse { .. })
        ));
    }
}
