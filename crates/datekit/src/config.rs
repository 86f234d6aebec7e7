//! Holiday fetch simulation settings.

use serde::{Deserialize, Serialize};

/// Configuration for the simulated holiday fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HolidayFetchConfig {
    /// Artificial latency, in milliseconds, applied before the holiday
    /// list resolves. Set to 0 for fast test runs.
    pub fetch_delay_ms: u64,
}

impl Default for HolidayFetchConfig {
    fn default() -> Self {
        Self { fetch_delay_ms: 100 }
    }
}
