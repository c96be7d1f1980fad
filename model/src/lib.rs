use serde::{Deserialize, Serialize};

/// Highest RSSI value a mock trace may contain, in dBm.
pub const RSSI_MAX: i32 = -51;

/// Lowest RSSI value a mock trace may contain, in dBm.
pub const RSSI_MIN: i32 = -94;

/// A single signal strength reading.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Sample {
    /// Seconds since the Unix epoch.
    pub timestamp: i64,
    /// Signal strength in dBm.
    pub rssi: i32,
}

impl Sample {
    pub fn new(timestamp: i64, rssi: i32) -> Self {
        Self { timestamp, rssi }
    }

    /// Whether the reading lies inside `[RSSI_MIN, RSSI_MAX]`.
    pub fn in_range(&self) -> bool {
        (RSSI_MIN..=RSSI_MAX).contains(&self.rssi)
    }
}

/// A trait to provide signal strength traces.
///
/// To be implemented for each data source, a live peripheral or a mock one for previews.
pub trait SignalProvider {
    fn read_signal(&self) -> Result<Vec<Sample>, Box<dyn std::error::Error>>;
}
