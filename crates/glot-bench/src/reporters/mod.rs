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

//! Report sinks.
//!
//! The driver hands every finished [`TimingReport`] to a [`ReportSink`].
//!
//! # Modules
//!
//! - `types`: report data structures
//! - `console`: bmbm-style text table

pub mod console;
pub mod types;

pub use console::ConsoleReporter;
pub use types::{Outcome, RunSummary, Target, TimingReport};

use crate::core::Mode;
use crate::error::Result;

/// Receives reports as the driver produces them.
pub trait ReportSink {
    /// Called before the first report of a mode.
    fn begin_mode(&mut self, _mode: Mode, _iterations: u64) -> Result<()> {
        Ok(())
    }

    /// Called once per (strategy, target) pair.
    fn emit(&mut self, report: &TimingReport) -> Result<()>;

    /// Called after the last mode.
    fn finish(&mut self, _summary: &RunSummary) -> Result<()> {
        Ok(())
    }
}

/// Collects reports in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    /// Modes in the order they began.
    pub modes: Vec<Mode>,
    /// Reports in emission order.
    pub reports: Vec<TimingReport>,
    /// Summary, once the run finished.
    pub summary: Option<RunSummary>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports produced in a given mode.
    pub fn reports_for(&self, mode: Mode) -> impl Iterator<Item = &TimingReport> {
        self.reports.iter().filter(move |r| r.mode == mode)
    }

    /// Labels in emission order.
    pub fn labels(&self) -> Vec<&str> {
        self.reports.iter().map(|r| r.label.as_str()).collect()
    }
}

impl ReportSink for MemorySink {
    fn begin_mode(&mut self, mode: Mode, _iterations: u64) -> Result<()> {
        self.modes.push(mode);
        Ok(())
    }

    fn emit(&mut self, report: &TimingReport) -> Result<()> {
        self.reports.push(report.clone());
        Ok(())
    }

    fn finish(&mut self, summary: &RunSummary) -> Result<()> {
        self.summary = Some(summary.clone());
        Ok(())
    }
}
