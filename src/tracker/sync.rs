//! TrackerSyncer: periodic presence polling
//!
//! Runs in a background tokio task. Every interval, scans each router and
//! logs devices that joined or left since the previous scan.

use std::collections::{BTreeSet, HashSet};

use tokio::time::{self, Duration};

use crate::tracker::DeviceScanner;

/// Device ids that appeared and disappeared between two scans
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PresenceChange {
    pub arrived: BTreeSet<String>,
    pub departed: BTreeSet<String>,
}

impl PresenceChange {
    pub fn between(previous: &HashSet<String>, current: &HashSet<String>) -> Self {
        Self {
            arrived: current.difference(previous).cloned().collect(),
            departed: previous.difference(current).cloned().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.arrived.is_empty() && self.departed.is_empty()
    }
}

struct TrackedScanner {
    name: String,
    scanner: Box<dyn DeviceScanner>,
    seen: HashSet<String>,
}

/// Background polling service for one or more device scanners
pub struct TrackerSyncer {
    scanners: Vec<TrackedScanner>,
    interval: Duration,
}

impl TrackerSyncer {
    pub fn new(interval: Duration) -> Self {
        Self {
            scanners: Vec::new(),
            interval,
        }
    }

    pub fn add_scanner(&mut self, name: impl Into<String>, scanner: Box<dyn DeviceScanner>) {
        self.scanners.push(TrackedScanner {
            name: name.into(),
            scanner,
            seen: HashSet::new(),
        });
    }

    /// Start the polling loop (runs forever)
    pub async fn start(mut self) {
        tracing::info!(
            "[TrackerSync] Starting presence polling (interval: {}s, scanners: {})",
            self.interval.as_secs(),
            self.scanners.len()
        );

        let mut ticker = time::interval(self.interval);
        // A slow router should not cause a burst of catch-up scans
        ticker.set_missed_tick_behavior(time::MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            self.poll_all().await;
        }
    }

    /// Scan every registered scanner once
    pub async fn poll_all(&mut self) -> Vec<PresenceChange> {
        let mut changes = Vec::with_capacity(self.scanners.len());

        for tracked in &mut self.scanners {
            let current: HashSet<String> = tracked.scanner.scan_devices().await.into_iter().collect();
            let change = PresenceChange::between(&tracked.seen, &current);

            for id in &change.arrived {
                let name = tracked
                    .scanner
                    .get_device_name(id)
                    .unwrap_or_else(|| "unknown".to_string());
                tracing::info!("[TrackerSync] {}: {} ({}) connected", tracked.name, id, name);
            }
            for id in &change.departed {
                tracing::info!("[TrackerSync] {}: {} disconnected", tracked.name, id);
            }

            tracing::debug!(
                "[TrackerSync] {}: {} devices present",
                tracked.name,
                current.len()
            );

            tracked.seen = current;
            changes.push(change);
        }

        changes
    }
}
