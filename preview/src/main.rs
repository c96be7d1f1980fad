use anyhow::Context;
use serde::Serialize;
use std::env::VarError;
use std::sync::{Arc, Mutex};

use signal_preview_common::signal::{
    MockSignalConfig, MockSignalProvider, SignalChart, SignalProviderPointer,
    SignalProviderSharedPointer, SystemClock,
};
use signal_preview_common::Sample;

/// Set to make the preview trace reproducible.
const SEED_VAR: &str = "SIGNAL_PREVIEW_SEED";

/// A sample as shown to the user.
#[derive(Serialize, Debug)]
struct SignalRecord {
    timestamp: i64,
    rssi: i32,
    time: String,
}

/// Our App struct that holds the signal provider and the chart fed by it.
///
/// Generally, I recommend to have an App struct that initializes the chart and the providers.
struct App {
    signal_provider: SignalProviderSharedPointer,
    chart: SignalChart,
}

impl App {
    /// Create a new App struct.
    ///
    /// If SIGNAL_PREVIEW_SEED is set, the mock provider is seeded with it, otherwise every run
    /// shows a different trace.
    fn new() -> anyhow::Result<Self> {
        let config = MockSignalConfig::preset()?;

        let provider = provider_from_seed(seed_from_env()?)?;
        let signal_provider: SignalProviderPointer = Box::new(provider.with_config(config));

        Ok(Self {
            signal_provider: Arc::new(Mutex::new(signal_provider)),
            chart: SignalChart::new(&SystemClock),
        })
    }

    /// Load a trace into the chart and print it.
    fn run(&mut self) -> anyhow::Result<()> {
        let samples = self
            .signal_provider
            .lock()
            .map_err(|e| anyhow::anyhow!("{e}"))?
            .read_signal()
            .map_err(|e| anyhow::anyhow!("{e}"))?;

        self.chart.load_preview(&samples);

        log::info!(
            "Chart: {} samples, signal axis {}..{} dBm, scrolled to {}",
            self.chart.len(),
            self.chart.lowest(),
            self.chart.highest(),
            self.chart.scroll_position()
        );

        let records: Vec<SignalRecord> =
            self.chart.samples().copied().map(SignalRecord::from).collect();
        println!("{}", serde_json::to_string_pretty(&records)?);

        Ok(())
    }
}

/// Read the seed variable. An unset variable means no seed.
fn seed_from_env() -> anyhow::Result<Option<String>> {
    match std::env::var(SEED_VAR) {
        Ok(seed) => Ok(Some(seed)),
        Err(VarError::NotPresent) => Ok(None),
        Err(e) => Err(e).with_context(|| format!("{SEED_VAR} could not be read")),
    }
}

/// Build the mock provider, seeded if a seed was given.
fn provider_from_seed(seed: Option<String>) -> anyhow::Result<MockSignalProvider> {
    match seed {
        Some(seed) => {
            let seed = seed.parse::<u64>().with_context(|| {
                format!("{SEED_VAR} must be an unsigned integer, got {seed:?}")
            })?;
            Ok(MockSignalProvider::seeded(seed))
        }
        None => Ok(MockSignalProvider::new()),
    }
}

/// Convert the sample into a record with a readable local time.
impl From<Sample> for SignalRecord {
    fn from(sample: Sample) -> Self {
        let time = chrono::DateTime::from_timestamp(sample.timestamp, 0)
            .map(|t| t.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default();

        Self {
            timestamp: sample.timestamp,
            rssi: sample.rssi,
            time,
        }
    }
}

/// A minimal main function that initializes the App and runs it.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut app = App::new()?;

    app.run()
}
