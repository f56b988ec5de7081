// Glot - Language Identification Benchmarks
//
// Copyright (c) 2025 The Glot contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Measurement primitives.
//!
//! A [`Measurement`] is the list of per-repetition durations ("laps") of one
//! measured block. Timing is plain [`Instant`] arithmetic around the call;
//! everything else (result disposal, cache resets) happens outside the timed
//! region.

use serde::Serialize;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::{Duration, Instant};

/// Durations of one measured block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Measurement {
    /// Sum of all laps.
    pub total: Duration,
    /// Duration of each repetition, in order.
    pub laps: Vec<Duration>,
}

impl Measurement {
    /// Creates a measurement from lap durations.
    pub fn from_laps(laps: Vec<Duration>) -> Self {
        Self {
            total: laps.iter().sum(),
            laps,
        }
    }

    /// Number of repetitions measured.
    pub fn iterations(&self) -> u64 {
        self.laps.len() as u64
    }

    /// Mean lap duration, zero when nothing was measured.
    pub fn mean(&self) -> Duration {
        self.statistics().mean
    }

    /// Summary statistics over the laps.
    pub fn statistics(&self) -> Statistics {
        compute_statistics(&self.laps)
    }
}

/// Statistics from multiple laps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    /// Mean duration.
    pub mean: Duration,
    /// Standard deviation.
    pub std_dev: Duration,
    /// Minimum duration.
    pub min: Duration,
    /// Maximum duration.
    pub max: Duration,
    /// Median duration.
    pub median: Duration,
}

/// Computes statistics from a collection of durations.
///
/// All fields are zero for an empty slice.
pub fn compute_statistics(durations: &[Duration]) -> Statistics {
    if durations.is_empty() {
        return Statistics::default();
    }

    let mut sorted = durations.to_vec();
    sorted.sort();

    let total: Duration = sorted.iter().sum();
    let mean = Duration::from_nanos((total.as_nanos() / sorted.len() as u128) as u64);

    let variance: f64 = sorted
        .iter()
        .map(|d| {
            let diff = d.as_nanos() as f64 - mean.as_nanos() as f64;
            diff * diff
        })
        .sum::<f64>()
        / sorted.len() as f64;

    Statistics {
        mean,
        std_dev: Duration::from_nanos(variance.sqrt() as u64),
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        median: sorted[sorted.len() / 2],
    }
}

/// Why a timed call did not produce a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallFailure<E> {
    /// The call returned an error.
    Error(E),
    /// The call panicked; holds the panic message when it was a string.
    Panic(String),
}

/// Times a single fallible call.
///
/// Panics raised by `f` are caught and reported as [`CallFailure::Panic`].
/// The returned value is dropped after the clock stops.
pub fn time_call<T, E, F>(f: F) -> (Duration, Result<(), CallFailure<E>>)
where
    F: FnOnce() -> Result<T, E>,
{
    let start = Instant::now();
    let outcome = catch_unwind(AssertUnwindSafe(f));
    let elapsed = start.elapsed();

    let result = match outcome {
        Ok(Ok(value)) => {
            drop(std::hint::black_box(value));
            Ok(())
        }
        Ok(Err(err)) => Err(CallFailure::Error(err)),
        Err(payload) => Err(CallFailure::Panic(panic_message(payload.as_ref()))),
    };
    (elapsed, result)
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic with non-string payload".to_string()
    }
}
