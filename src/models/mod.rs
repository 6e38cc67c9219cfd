//! Data models for the ZTE station list API

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single associated wireless client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientEntry {
    pub mac_addr: String,
    // Key must be present; value may be null.
    #[serde(deserialize_with = "Option::deserialize")]
    pub hostname: Option<String>,
}

/// Body of `goform_get_cmd_process?cmd=station_list`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationList {
    pub station_list: Vec<ClientEntry>,
}

impl StationList {
    /// Reduce to MAC -> hostname. Repeated MACs keep the last entry.
    pub fn into_map(self) -> HashMap<String, Option<String>> {
        self.station_list
            .into_iter()
            .map(|entry| (entry.mac_addr, entry.hostname))
            .collect()
    }
}
