// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

/// Source of the current wall-clock time.
pub trait Clock {
    /// Current time in whole seconds since the Unix epoch.
    fn unix_time(&self) -> i64;
}

/// Reads the system clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_time(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// A clock frozen at a given instant, for reproducible traces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn unix_time(&self) -> i64 {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn unix_time(&self) -> i64 {
        (**self).unix_time()
    }
}

#[test]
fn test_fixed_clock() {
    let clock = FixedClock(1_698_836_945);
    assert_eq!(clock.unix_time(), 1_698_836_945);
    assert_eq!((&clock).unix_time(), 1_698_836_945);
}

#[test]
fn test_system_clock_is_after_2023() {
    assert!(SystemClock.unix_time() > 1_672_531_200);
}
