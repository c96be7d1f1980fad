// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod clock;
mod mockgenerator;
mod mocksignalprovider;
mod signalchart;

pub use clock::{Clock, FixedClock, SystemClock};

pub use mockgenerator::{generate, MockSignalConfig, MockSignalGenerator};

pub use mocksignalprovider::{
    MockSignalProvider, SignalProviderPointer, SignalProviderSharedPointer,
};

pub use signalchart::SignalChart;
