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

//! Report data structures.

use crate::core::{Kind, Measurement, Mode, Statistics};
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// What a report measured: one sample, or the whole corpus.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Target {
    /// A single sample, identified by its label.
    Sample(String),
    /// The whole corpus in one block.
    Total,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Sample(name) => write!(f, "{}", name),
            Target::Total => write!(f, "total"),
        }
    }
}

/// How a (strategy, target) pair ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// Every repetition returned normally.
    Completed {
        /// Timing of the rehearsal block, when one ran.
        rehearsal: Option<Duration>,
        /// The measured block.
        measurement: Measurement,
    },
    /// A repetition returned an error or panicked.
    Failed {
        /// Error or panic message.
        reason: String,
    },
}

/// Timing report for one (strategy, target) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimingReport {
    /// Full report label, e.g. `GetLanguagesByShebang()_TOTAL 10`.
    pub label: String,
    /// Strategy label.
    pub strategy: String,
    /// Strategy contract.
    pub kind: Kind,
    /// Mode the report was produced in.
    pub mode: Mode,
    /// Sample or total.
    pub target: Target,
    /// Configured repetition count.
    pub iterations: u64,
    /// Result of the pair.
    pub outcome: Outcome,
}

impl TimingReport {
    /// Builds the report label for a strategy and target.
    pub fn label_for(strategy: &str, target: &Target, iterations: u64) -> String {
        match target {
            Target::Sample(name) => format!("{}()_SAMPLE_{} {}", strategy, name, iterations),
            Target::Total => format!("{}()_TOTAL {}", strategy, iterations),
        }
    }

    /// Returns whether the pair failed.
    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, Outcome::Failed { .. })
    }

    /// The measured block, if the pair completed.
    pub fn measurement(&self) -> Option<&Measurement> {
        match &self.outcome {
            Outcome::Completed { measurement, .. } => Some(measurement),
            Outcome::Failed { .. } => None,
        }
    }

    /// Rehearsal duration, if the pair completed with a rehearsal.
    pub fn rehearsal(&self) -> Option<Duration> {
        match &self.outcome {
            Outcome::Completed { rehearsal, .. } => *rehearsal,
            Outcome::Failed { .. } => None,
        }
    }

    /// Lap statistics; zero for failed pairs.
    pub fn statistics(&self) -> Statistics {
        self.measurement()
            .map(Measurement::statistics)
            .unwrap_or_default()
    }

    /// Failure reason, if any.
    pub fn failure(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Failed { reason } => Some(reason),
            Outcome::Completed { .. } => None,
        }
    }
}

/// Totals over a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Reports emitted.
    pub reports: usize,
    /// Reports that failed.
    pub failed: usize,
    /// Wall time of the whole run.
    pub elapsed: Duration,
}

impl RunSummary {
    /// Counts one emitted report.
    pub fn record(&mut self, report: &TimingReport) {
        self.reports += 1;
        if report.is_failed() {
            self.failed += 1;
        }
    }

    /// Reports that completed.
    pub fn succeeded(&self) -> usize {
        self.reports - self.failed
    }
}
