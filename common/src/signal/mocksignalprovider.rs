// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::sync::{Arc, Mutex};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::signal::clock::{Clock, SystemClock};
use crate::signal::mockgenerator::{MockSignalConfig, MockSignalGenerator};
use signal_preview_model::{Sample, SignalProvider};

pub type SignalProviderPointer = Box<dyn SignalProvider + Send>;

pub type SignalProviderSharedPointer = Arc<Mutex<SignalProviderPointer>>;

/// Serves generated traces in place of a connected peripheral.
///
/// Without a seed every read draws from the thread-local RNG. A seeded provider replays the
/// same sequence of traces on every run.
pub struct MockSignalProvider {
    clock: Box<dyn Clock + Send + Sync>,
    config: MockSignalConfig,
    rng: Option<Mutex<ChaCha8Rng>>,
}

impl Default for MockSignalProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSignalProvider {
    pub fn new() -> Self {
        Self {
            clock: Box::new(SystemClock),
            config: MockSignalConfig::default(),
            rng: None,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        log::debug!("Mock signal seeded with {seed}");

        Self {
            rng: Some(Mutex::new(ChaCha8Rng::seed_from_u64(seed))),
            ..Self::new()
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + Send + Sync + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_config(mut self, config: MockSignalConfig) -> Self {
        self.config = config;
        self
    }
}

impl SignalProvider for MockSignalProvider {
    fn read_signal(&self) -> Result<Vec<Sample>, Box<dyn std::error::Error>> {
        let config = self.config.clone();

        match &self.rng {
            Some(rng) => {
                let mut rng = rng.lock().map_err(|e| e.to_string())?;
                let mut generator =
                    MockSignalGenerator::with_config(self.clock.as_ref(), &mut *rng, config);
                Ok(generator.generate())
            }
            None => {
                let mut generator =
                    MockSignalGenerator::with_config(self.clock.as_ref(), rand::rng(), config);
                Ok(generator.generate())
            }
        }
    }
}
