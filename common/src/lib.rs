pub mod signal;

pub use signal_preview_model::{Sample, SignalProvider, RSSI_MAX, RSSI_MIN};
