//! Device tracker integration
//!
//! - `DeviceScanner`: capability the tracking host depends on
//! - `sync`: host-side polling loop

pub mod sync;

pub use sync::TrackerSyncer;

use async_trait::async_trait;

/// Reports which devices are currently reachable, keyed by MAC address
#[async_trait]
pub trait DeviceScanner: Send + Sync {
    /// Refresh from the source and return the current device ids
    async fn scan_devices(&mut self) -> Vec<String>;

    /// Name of a device from the last scan, without refreshing
    fn get_device_name(&self, device: &str) -> Option<String>;
}
