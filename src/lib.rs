//! zte-tracker - device presence for ZTE routers
//!
//! Polls the router's `station_list` endpoint and exposes the associated
//! wireless clients as MAC address -> hostname.

pub mod config;
pub mod error;
pub mod models;
pub mod tracker;
pub mod zte;

pub use config::{Config, ScannerConfig};
pub use error::ScanError;
pub use tracker::{DeviceScanner, TrackerSyncer};
pub use zte::{get_scanner, RouterClientScanner};
