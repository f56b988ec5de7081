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

//! Console reporter.
//!
//! Prints a table in the spirit of Ruby's `Benchmark.bmbm`: a section per
//! mode, then one block per report with the rehearsal and measured timings.

use crate::core::Mode;
use crate::error::Result;
use crate::reporters::types::{Outcome, RunSummary, TimingReport};
use crate::reporters::ReportSink;
use std::io::Write;

const WIDTH: usize = 80;

/// Writes reports as text to any writer, usually stdout.
#[derive(Debug)]
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReporter<W> {
    /// Creates a reporter writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for ConsoleReporter<W> {
    fn begin_mode(&mut self, mode: Mode, iterations: u64) -> Result<()> {
        writeln!(self.out, "\n{}", "=".repeat(WIDTH))?;
        writeln!(self.out, "MODE: {} ({} iterations)", mode.as_str(), iterations)?;
        writeln!(self.out, "{}", "=".repeat(WIDTH))?;
        Ok(())
    }

    fn emit(&mut self, report: &TimingReport) -> Result<()> {
        writeln!(self.out, "{}", report.label)?;
        match &report.outcome {
            Outcome::Completed {
                rehearsal,
                measurement,
            } => {
                if let Some(rehearsal) = rehearsal {
                    writeln!(self.out, "  rehearsal  {:?}", rehearsal)?;
                }
                let stats = measurement.statistics();
                writeln!(
                    self.out,
                    "  real       {:?} (mean {:?}, min {:?}, max {:?})",
                    measurement.total, stats.mean, stats.min, stats.max
                )?;
            }
            Outcome::Failed { reason } => {
                writeln!(self.out, "  FAILED     {}", reason)?;
            }
        }
        Ok(())
    }

    fn finish(&mut self, summary: &RunSummary) -> Result<()> {
        writeln!(self.out, "\n{}", "-".repeat(WIDTH))?;
        writeln!(
            self.out,
            "Reports: {}, failed: {}, elapsed: {:?}",
            summary.reports, summary.failed, summary.elapsed
        )?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Kind, Measurement};
    use crate::reporters::types::Target;
    use std::time::Duration;

    fn render(f: impl FnOnce(&mut ConsoleReporter<Vec<u8>>) -> Result<()>) -> String {
        let mut reporter = ConsoleReporter::new(Vec::new());
        f(&mut reporter).unwrap();
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    fn report(outcome: Outcome) -> TimingReport {
        TimingReport {
            label: "GetLanguagesByShebang()_TOTAL 2".to_string(),
            strategy: "GetLanguagesByShebang".to_string(),
            kind: Kind::Sample,
            mode: Mode::Total,
            target: Target::Total,
            iterations: 2,
            outcome,
        }
    }

    #[test]
    fn test_mode_header() {
        let text = render(|r| r.begin_mode(Mode::PerSample, 4));
        assert!(text.contains("MODE: per-sample (4 iterations)"));
    }

    #[test]
    fn test_completed_block() {
        let text = render(|r| {
            r.emit(&report(Outcome::Completed {
                rehearsal: Some(Duration::from_millis(3)),
                measurement: Measurement::from_laps(vec![Duration::from_millis(1); 2]),
            }))
        });
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "GetLanguagesByShebang()_TOTAL 2");
        assert_eq!(lines[1], "  rehearsal  3ms");
        assert!(lines[2].starts_with("  real       2ms (mean 1ms"));
    }

    #[test]
    fn test_failed_block() {
        let text = render(|r| {
            r.emit(&report(Outcome::Failed {
                reason: "strategy panicked: boom".to_string(),
            }))
        });
        assert!(text.contains("  FAILED     strategy panicked: boom"));
    }

    #[test]
    fn test_summary_line() {
        let summary = RunSummary {
            reports: 12,
            failed: 1,
            elapsed: Duration::from_secs(1),
        };
        let text = render(|r| r.finish(&summary));
        assert!(text.contains("Reports: 12, failed: 1, elapsed: 1s"));
    }
}
