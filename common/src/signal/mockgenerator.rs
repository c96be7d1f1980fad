// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use rand::Rng;
use serde::Deserialize;

use crate::signal::clock::{Clock, SystemClock};
use signal_preview_model::{Sample, RSSI_MAX, RSSI_MIN};

/// Nominal upper bound. Reaching it pulls the walk back to `RSSI_MAX`.
const NOMINAL_HIGH: i32 = -50;

/// Nominal lower bound. Reaching it pulls the walk back to `RSSI_MIN`.
const NOMINAL_LOW: i32 = -95;

/// Shape of the random walk.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct MockSignalConfig {
    /// Number of samples in a trace.
    pub sample_count: usize,
    /// Signal strength the walk starts from, before the first step.
    pub initial_rssi: i32,
    /// Largest change between two consecutive samples.
    pub max_step: u8,
}

impl Default for MockSignalConfig {
    fn default() -> Self {
        Self {
            sample_count: 100,
            initial_rssi: -60,
            max_step: 2,
        }
    }
}

impl MockSignalConfig {
    /// Parses the preset bundled with the crate.
    pub fn preset() -> Result<Self, serde_json::Error> {
        let json_data = std::include_str!("./mocksignal.json");

        serde_json::from_str::<Self>(json_data)
    }
}

/// Produces mock RSSI traces for chart previews.
///
/// The clock and the random source are injected, so a fixed clock and a seeded
/// RNG give the same trace on every run.
pub struct MockSignalGenerator<C, R> {
    clock: C,
    rng: R,
    config: MockSignalConfig,
}

impl<C: Clock, R: Rng> MockSignalGenerator<C, R> {
    pub fn new(clock: C, rng: R) -> Self {
        Self::with_config(clock, rng, MockSignalConfig::default())
    }

    pub fn with_config(clock: C, rng: R, config: MockSignalConfig) -> Self {
        Self { clock, rng, config }
    }

    /// Generates a trace, newest sample first.
    ///
    /// The first sample is stamped one second before the clock's current time and every
    /// following one a second earlier.
    pub fn generate(&mut self) -> Vec<Sample> {
        let mut unix_time = self.clock.unix_time();
        let mut rssi = self.config.initial_rssi;
        let step = i32::from(self.config.max_step);

        let mut samples = Vec::with_capacity(self.config.sample_count);
        for _ in 0..self.config.sample_count {
            unix_time -= 1;
            rssi = clamp(rssi + self.rng.random_range(-step..=step));
            samples.push(Sample::new(unix_time, rssi));
        }

        log::debug!(
            "Generated {} mock samples ending at {}",
            samples.len(),
            unix_time
        );

        samples
    }
}

/// Pulls a value that reached a nominal bound back one unit inside it.
///
/// The bounds themselves count as reached (`>=` / `<=`, not `>` / `<`). Otherwise -50 and -95
/// would pass through unclamped and leave `[RSSI_MIN, RSSI_MAX]`.
fn clamp(rssi: i32) -> i32 {
    if rssi >= NOMINAL_HIGH {
        log::trace!("Clamping {rssi} to {RSSI_MAX}");
        RSSI_MAX
    } else if rssi <= NOMINAL_LOW {
        log::trace!("Clamping {rssi} to {RSSI_MIN}");
        RSSI_MIN
    } else {
        rssi
    }
}

/// Generates a 100 sample trace from the system clock and the thread-local RNG.
pub fn generate() -> Vec<Sample> {
    MockSignalGenerator::new(SystemClock, rand::rng()).generate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::FixedClock;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const START: i64 = 1_698_836_945;

    fn seeded(seed: u64) -> MockSignalGenerator<FixedClock, ChaCha8Rng> {
        MockSignalGenerator::new(FixedClock(START), ChaCha8Rng::seed_from_u64(seed))
    }

    #[test]
    fn test_clamp_inset() {
        assert_eq!(clamp(-48), -51);
        assert_eq!(clamp(-50), -51);
        assert_eq!(clamp(-51), -51);
        assert_eq!(clamp(-60), -60);
        assert_eq!(clamp(-94), -94);
        assert_eq!(clamp(-95), -94);
        assert_eq!(clamp(-97), -94);
    }

    #[test]
    fn test_preset_matches_default() {
        assert_eq!(MockSignalConfig::preset().unwrap(), MockSignalConfig::default());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: MockSignalConfig = serde_json::from_str(r#"{ "max_step": 5 }"#).unwrap();
        assert_eq!(config.sample_count, 100);
        assert_eq!(config.initial_rssi, -60);
        assert_eq!(config.max_step, 5);
    }

    #[test]
    fn test_generate_len_and_range() {
        for seed in 0..200 {
            let samples = seeded(seed).generate();
            assert_eq!(samples.len(), 100);
            assert!(samples.iter().all(Sample::in_range), "seed {seed}");
        }
    }

    #[test]
    fn test_first_step_from_initial_rssi() {
        let samples = seeded(7).generate();
        assert!((samples[0].rssi - -60).abs() <= 2);
    }

    #[test]
    fn test_timestamps_count_down() {
        let samples = seeded(1).generate();
        assert_eq!(samples[0].timestamp, START - 1);
        assert_eq!(samples[99].timestamp, START - 100);
        for pair in samples.windows(2) {
            assert_eq!(pair[1].timestamp, pair[0].timestamp - 1);
        }
    }

    #[test]
    fn test_steps_are_bounded() {
        for seed in 0..200 {
            let samples = seeded(seed).generate();
            for pair in samples.windows(2) {
                let jump = (pair[1].rssi - pair[0].rssi).abs();
                // A clamp may land one unit further than a plain step.
                let allowed = if pair[1].rssi == RSSI_MAX || pair[1].rssi == RSSI_MIN {
                    3
                } else {
                    2
                };
                assert!(jump <= allowed, "seed {seed}: {:?} -> {:?}", pair[0], pair[1]);
            }
        }
    }

    #[test]
    fn test_same_seed_same_trace() {
        assert_eq!(seeded(42).generate(), seeded(42).generate());
    }

    #[test]
    fn test_walk_reaches_the_bounds() {
        let config = MockSignalConfig {
            sample_count: 10_000,
            ..MockSignalConfig::default()
        };
        let samples = MockSignalGenerator::with_config(
            FixedClock(START),
            ChaCha8Rng::seed_from_u64(3),
            config,
        )
        .generate();

        assert!(samples.iter().all(Sample::in_range));
        assert!(samples.iter().any(|s| s.rssi == RSSI_MAX));
        assert!(samples.iter().any(|s| s.rssi == RSSI_MIN));
    }

    #[test]
    fn test_zero_step_is_flat() {
        let config = MockSignalConfig {
            max_step: 0,
            ..MockSignalConfig::default()
        };
        let samples = MockSignalGenerator::with_config(
            FixedClock(START),
            ChaCha8Rng::seed_from_u64(0),
            config,
        )
        .generate();
        assert!(samples.iter().all(|s| s.rssi == -60));
    }

    #[test]
    fn test_generate_uses_wall_clock() {
        let before = SystemClock.unix_time();
        let samples = generate();
        let after = SystemClock.unix_time();

        assert_eq!(samples.len(), 100);
        assert!(samples[0].timestamp >= before - 1 && samples[0].timestamp <= after - 1);
        assert!(samples.iter().all(Sample::in_range));
    }
}
