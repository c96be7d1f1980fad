// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::collections::VecDeque;

use crate::signal::clock::Clock;
use signal_preview_model::Sample;

/// The state behind a scrolling RSSI chart.
///
/// Samples are kept oldest first. The axis bounds are recomputed on every change so the view
/// can bind to them directly.
#[derive(Clone, Debug, PartialEq)]
pub struct SignalChart {
    samples: VecDeque<Sample>,
    scroll_position: i64,
    lowest: i32,
    highest: i32,
    min_date: Option<i64>,
    max_date: Option<i64>,
}

impl SignalChart {
    /// Width of the visible window in seconds.
    pub const VISIBLE_DOMAIN: i64 = 60;

    /// Number of samples kept before the oldest is dropped.
    pub const CAPACITY: usize = 180;

    const DEFAULT_LOWEST: i32 = -100;
    const DEFAULT_HIGHEST: i32 = -40;

    /// Headroom above and below the extreme readings, in dBm.
    const SIGNAL_MARGIN: i32 = 5;

    /// Headroom before the first and after the last reading, in seconds.
    const DATE_MARGIN: i64 = 2;

    pub fn new(clock: &impl Clock) -> Self {
        const _: () = assert!(SignalChart::CAPACITY as i64 >= SignalChart::VISIBLE_DOMAIN);

        Self {
            samples: VecDeque::with_capacity(Self::CAPACITY),
            scroll_position: clock.unix_time(),
            lowest: Self::DEFAULT_LOWEST,
            highest: Self::DEFAULT_HIGHEST,
            min_date: None,
            max_date: None,
        }
    }

    /// Appends a live reading.
    ///
    /// The view keeps following new readings while it is scrolled close to the end, otherwise it
    /// stays where the user left it.
    pub fn push(&mut self, sample: Sample) {
        if sample.timestamp - self.scroll_position < Self::VISIBLE_DOMAIN + 5
            || self.samples.is_empty()
        {
            self.scroll_position = sample.timestamp;
        }

        self.samples.push_back(sample);
        if self.samples.len() > Self::CAPACITY {
            self.samples.pop_front();
        }

        self.update_bounds();
    }

    /// Replaces the contents with a prepared trace, in any order.
    ///
    /// Only the newest `CAPACITY` samples are kept and the view scrolls to the newest one.
    pub fn load_preview(&mut self, samples: &[Sample]) {
        let mut sorted = samples.to_vec();
        sorted.sort_by_key(|sample| sample.timestamp);

        let skip = sorted.len().saturating_sub(Self::CAPACITY);
        self.samples = sorted.into_iter().skip(skip).collect();

        if let Some(newest) = self.samples.back() {
            self.scroll_position = newest.timestamp;
        }

        log::debug!("Loaded {} preview samples", self.samples.len());

        self.update_bounds();
    }

    /// Drops every sample and resets the axis bounds.
    pub fn clear(&mut self) {
        self.samples.clear();
        self.update_bounds();
    }

    fn update_bounds(&mut self) {
        let min = self.samples.iter().map(|s| s.rssi).min();
        let max = self.samples.iter().map(|s| s.rssi).max();

        self.lowest = min.map_or(Self::DEFAULT_LOWEST, |min| min - Self::SIGNAL_MARGIN);
        self.highest = max.map_or(Self::DEFAULT_HIGHEST, |max| max + Self::SIGNAL_MARGIN);

        let oldest = self.samples.iter().map(|s| s.timestamp).min();
        let newest = self.samples.iter().map(|s| s.timestamp).max();

        self.min_date = oldest.map(|t| t - Self::DATE_MARGIN);
        self.max_date = newest.map(|t| t + Self::DATE_MARGIN);
    }

    pub fn samples(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    /// Samples inside the window ending at the scroll position.
    pub fn visible(&self) -> impl Iterator<Item = &Sample> {
        let end = self.scroll_position;
        let start = end - Self::VISIBLE_DOMAIN;

        self.samples
            .iter()
            .filter(move |s| s.timestamp >= start && s.timestamp <= end)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn scroll_position(&self) -> i64 {
        self.scroll_position
    }

    pub fn set_scroll_position(&mut self, scroll_position: i64) {
        self.scroll_position = scroll_position;
    }

    /// Lower bound of the signal axis.
    pub fn lowest(&self) -> i32 {
        self.lowest
    }

    /// Upper bound of the signal axis.
    pub fn highest(&self) -> i32 {
        self.highest
    }

    pub fn min_date(&self) -> Option<i64> {
        self.min_date
    }

    pub fn max_date(&self) -> Option<i64> {
        self.max_date
    }
}
