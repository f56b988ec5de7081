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

//! Benchmark driver.
//!
//! For every registered strategy and every enabled mode, runs the configured
//! number of repetitions, resets sample caches after each invocation and
//! hands one [`TimingReport`] per (strategy, target) pair to the sink as soon
//! as that pair is done.
//!
//! Each pair optionally runs a rehearsal of its whole block first; the
//! rehearsal duration is reported separately and never mixed into the
//! measured laps. A strategy that errors or panics fails only its own pair.

use crate::core::{
    time_call, BenchConfig, CallFailure, Context, Measurement, Mode, RegisteredStrategy, Registry,
};
use crate::error::{BenchError, Result};
use crate::fixtures::{Corpus, Sample};
use crate::reporters::{Outcome, ReportSink, RunSummary, Target, TimingReport};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Runs the registry against a corpus.
#[derive(Debug)]
pub struct BenchmarkRunner<'a> {
    config: BenchConfig,
    registry: &'a Registry,
    context: &'a Context,
}

impl<'a> BenchmarkRunner<'a> {
    /// Creates a runner.
    pub fn new(config: BenchConfig, registry: &'a Registry, context: &'a Context) -> Self {
        Self {
            config,
            registry,
            context,
        }
    }

    /// The configuration in use.
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Runs every enabled mode in order, per-sample first.
    ///
    /// Strategy failures are recorded in the reports; only sink errors abort
    /// the run.
    pub fn run(&self, corpus: &mut Corpus, sink: &mut dyn ReportSink) -> Result<RunSummary> {
        let started = Instant::now();
        let mut summary = RunSummary::default();

        for mode in Mode::ALL {
            if !self.config.runs(mode) {
                continue;
            }
            info!(
                mode = mode.as_str(),
                strategies = self.registry.len(),
                samples = corpus.len(),
                iterations = self.config.iterations,
                "starting mode"
            );
            sink.begin_mode(mode, self.config.iterations)?;
            match mode {
                Mode::PerSample => self.run_per_sample(corpus, sink, &mut summary)?,
                Mode::Total => self.run_total(corpus, sink, &mut summary)?,
            }
        }

        summary.elapsed = started.elapsed();
        sink.finish(&summary)?;
        Ok(summary)
    }

    /// Per-sample mode: one report per (strategy, sample), strategies outer.
    pub fn run_per_sample(
        &self,
        corpus: &mut Corpus,
        sink: &mut dyn ReportSink,
        summary: &mut RunSummary,
    ) -> Result<()> {
        for strategy in self.registry.iter() {
            for sample in corpus.samples_mut() {
                let report = self.bench_sample(strategy, sample);
                deliver(&report, sink, summary)?;
            }
        }
        Ok(())
    }

    /// Total mode: one report per strategy covering the whole corpus.
    pub fn run_total(
        &self,
        corpus: &mut Corpus,
        sink: &mut dyn ReportSink,
        summary: &mut RunSummary,
    ) -> Result<()> {
        for strategy in self.registry.iter() {
            let report = self.bench_total(strategy, corpus.samples_mut());
            deliver(&report, sink, summary)?;
        }
        Ok(())
    }

    /// Benchmarks one strategy on one sample.
    pub fn bench_sample(
        &self,
        strategy: &RegisteredStrategy,
        sample: &mut Sample,
    ) -> TimingReport {
        let target = Target::Sample(sample.label().to_string());
        let outcome =
            self.measure_pair(strategy, &target, || self.sample_block(strategy, sample));
        self.report(strategy, Mode::PerSample, target, outcome)
    }

    /// Benchmarks one strategy over all samples as a single block.
    pub fn bench_total(
        &self,
        strategy: &RegisteredStrategy,
        samples: &mut [Sample],
    ) -> TimingReport {
        let target = Target::Total;
        let outcome =
            self.measure_pair(strategy, &target, || self.total_block(strategy, samples));
        self.report(strategy, Mode::Total, target, outcome)
    }

    fn measure_pair<F>(
        &self,
        strategy: &RegisteredStrategy,
        target: &Target,
        mut block: F,
    ) -> Outcome
    where
        F: FnMut() -> Result<Vec<Duration>>,
    {
        let result = (|| -> Result<Outcome> {
            let rehearsal = if self.config.warmup {
                Some(block()?.iter().sum())
            } else {
                None
            };
            let measurement = Measurement::from_laps(block()?);
            Ok(Outcome::Completed {
                rehearsal,
                measurement,
            })
        })();

        match result {
            Ok(outcome) => {
                debug!(strategy = strategy.label(), subject = %target, "pair measured");
                outcome
            }
            Err(err) => {
                warn!(
                    strategy = strategy.label(),
                    subject = %target,
                    error = %err,
                    "strategy failed"
                );
                Outcome::Failed {
                    reason: err.to_string(),
                }
            }
        }
    }

    fn sample_block(
        &self,
        strategy: &RegisteredStrategy,
        sample: &mut Sample,
    ) -> Result<Vec<Duration>> {
        let mut laps = Vec::with_capacity(self.lap_capacity());
        for _ in 0..self.config.iterations {
            laps.push(self.invoke_once(strategy, sample)?);
        }
        Ok(laps)
    }

    fn total_block(
        &self,
        strategy: &RegisteredStrategy,
        samples: &mut [Sample],
    ) -> Result<Vec<Duration>> {
        let mut laps = Vec::with_capacity(self.lap_capacity());
        for _ in 0..self.config.iterations {
            let mut lap = Duration::ZERO;
            for sample in samples.iter_mut() {
                lap += self.invoke_once(strategy, sample)?;
            }
            laps.push(lap);
        }
        Ok(laps)
    }

    /// Times one invocation and resets the sample, also when it failed.
    fn invoke_once(
        &self,
        strategy: &RegisteredStrategy,
        sample: &mut Sample,
    ) -> Result<Duration> {
        let (elapsed, result) = time_call(|| strategy.invoke(sample, self.context));
        sample.reset();

        match result {
            Ok(()) => Ok(elapsed),
            Err(failure) => {
                let reason = match failure {
                    CallFailure::Error(err) => err.to_string(),
                    CallFailure::Panic(message) => format!("panicked: {}", message),
                };
                Err(BenchError::Strategy {
                    strategy: strategy.label().to_string(),
                    target: sample.label().to_string(),
                    reason,
                })
            }
        }
    }

    fn lap_capacity(&self) -> usize {
        usize::try_from(self.config.iterations)
            .unwrap_or(usize::MAX)
            .min(1024)
    }

    fn report(
        &self,
        strategy: &RegisteredStrategy,
        mode: Mode,
        target: Target,
        outcome: Outcome,
    ) -> TimingReport {
        TimingReport {
            label: TimingReport::label_for(strategy.label(), &target, self.config.iterations),
            strategy: strategy.label().to_string(),
            kind: strategy.kind(),
            mode,
            target,
            iterations: self.config.iterations,
            outcome,
        }
    }
}

fn deliver(
    report: &TimingReport,
    sink: &mut dyn ReportSink,
    summary: &mut RunSummary,
) -> Result<()> {
    summary.record(report);
    sink.emit(report)
}
