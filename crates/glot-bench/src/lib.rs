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

//! Glot Benchmark Harness
//!
//! Times language-detection strategies over a corpus of sample files.
//!
//! ## Features
//!
//! - **Corpus loading**: every file below a root, read once into memory
//! - **Strategy registry**: the classifier plus the modeline, filename,
//!   shebang, extension and content strategies
//! - **Two modes**: one report per (strategy, sample) and one per strategy
//!   over the whole corpus
//! - **Isolation**: a strategy that errors or panics only fails its own report
//!
//! ## Usage
//!
//! From a directory containing `.linguist/samples`:
//! ```bash
//! glot-bench 10
//! ```
//!
//! Run the criterion benches:
//! ```bash
//! cargo bench --package glot-bench
//! ```

pub mod core;
pub mod error;
pub mod fixtures;
pub mod harness;
pub mod reporters;

pub use crate::core::{BenchConfig, Context, Mode, Registry};
pub use error::{BenchError, Result};
pub use fixtures::{Corpus, Sample};
pub use harness::BenchmarkRunner;
pub use reporters::{ConsoleReporter, MemorySink, ReportSink, RunSummary, TimingReport};

use glot_detect::load_language_candidates;

/// Loads the corpus named by `config`, trains the classifier on it and runs
/// the standard registry, streaming reports into `sink`.
///
/// Fails before any measurement if the corpus or the detection data cannot
/// be loaded; strategy failures only mark their own reports.
pub fn run(config: &BenchConfig, sink: &mut dyn ReportSink) -> Result<RunSummary> {
    let mut corpus = Corpus::load(&config.corpus_root)?;
    let languages = load_language_candidates()?;
    let statistics = corpus.statistics(&languages);
    let context = Context::new(languages, statistics);
    let registry = Registry::standard()?;

    BenchmarkRunner::new(config.clone(), &registry, &context).run(&mut corpus, sink)
}
