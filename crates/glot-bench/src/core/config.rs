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

//! Benchmark configuration.
//!
//! Holds the repetition count, the rehearsal switch, the corpus location and
//! the reporting modes to run.

use serde::Serialize;
use std::ffi::OsString;
use std::path::PathBuf;

/// Repetition count used when none (or an unusable one) is given.
pub const DEFAULT_ITERATIONS: u64 = 1;

/// Corpus location relative to the working directory.
pub const DEFAULT_CORPUS_ROOT: &str = ".linguist/samples";

/// Reporting mode of the benchmark driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Mode {
    /// One report per (strategy, sample).
    PerSample,
    /// One report per strategy covering the whole corpus.
    Total,
}

impl Mode {
    /// Both modes, in the order they are run.
    pub const ALL: [Mode; 2] = [Mode::PerSample, Mode::Total];

    /// Short name used in logs and section headers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::PerSample => "per-sample",
            Mode::Total => "total",
        }
    }
}

/// Benchmark configuration.
///
/// # Example
///
/// ```no_run
/// use glot_bench::core::config::{BenchConfig, Mode};
///
/// let config = BenchConfig::default()
///     .with_iterations(10)
///     .with_modes(vec![Mode::Total]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Repetitions per (strategy, target) pair.
    pub iterations: u64,
    /// Run a rehearsal of the whole block before the measured one.
    pub warmup: bool,
    /// Directory the corpus is loaded from.
    pub corpus_root: PathBuf,
    /// Modes to run, in order.
    pub modes: Vec<Mode>,
}

impl BenchConfig {
    /// Creates a configuration with the given repetition count.
    pub fn new(iterations: u64) -> Self {
        Self {
            iterations,
            warmup: true,
            corpus_root: PathBuf::from(DEFAULT_CORPUS_ROOT),
            modes: Mode::ALL.to_vec(),
        }
    }

    /// Builds a configuration from command-line arguments (program name
    /// already stripped). Only the first argument is consulted.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        let first = args.into_iter().next();
        let iterations = parse_iterations(first.as_deref().and_then(|arg| arg.to_str()));
        Self::new(iterations)
    }

    /// Sets the repetition count.
    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    /// Enables or disables the rehearsal run.
    pub fn with_warmup(mut self, warmup: bool) -> Self {
        self.warmup = warmup;
        self
    }

    /// Sets the corpus root.
    pub fn with_corpus_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.corpus_root = root.into();
        self
    }

    /// Sets the modes to run.
    pub fn with_modes(mut self, modes: Vec<Mode>) -> Self {
        self.modes = modes;
        self
    }

    /// Returns whether a mode is enabled.
    pub fn runs(&self, mode: Mode) -> bool {
        self.modes.contains(&mode)
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ITERATIONS)
    }
}

/// Parses the repetition count argument.
///
/// Absent, empty, negative and non-numeric input all fall back to
/// [`DEFAULT_ITERATIONS`]; this never fails.
pub fn parse_iterations(arg: Option<&str>) -> u64 {
    arg.and_then(|raw| raw.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_ITERATIONS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_config() {
        let config = BenchConfig::default();
        assert_eq!(config.iterations, 1);
        assert!(config.warmup);
        assert_eq!(config.corpus_root, PathBuf::from(".linguist/samples"));
        assert_eq!(config.modes, vec![Mode::PerSample, Mode::Total]);
    }

    #[test]
    fn test_builders() {
        let config = BenchConfig::default()
            .with_iterations(5)
            .with_warmup(false)
            .with_corpus_root("/tmp/corpus")
            .with_modes(vec![Mode::Total]);
        assert_eq!(config.iterations, 5);
        assert!(!config.warmup);
        assert!(config.runs(Mode::Total));
        assert!(!config.runs(Mode::PerSample));
    }

    #[test]
    fn test_parse_iterations() {
        assert_eq!(parse_iterations(None), 1);
        assert_eq!(parse_iterations(Some("")), 1);
        assert_eq!(parse_iterations(Some("abc")), 1);
        assert_eq!(parse_iterations(Some("-3")), 1);
        assert_eq!(parse_iterations(Some("12x")), 1);
        assert_eq!(parse_iterations(Some("0")), 0);
        assert_eq!(parse_iterations(Some(" 42 ")), 42);
    }

    #[test]
    fn test_from_args_uses_first_argument() {
        let config = BenchConfig::from_args(vec![OsString::from("3"), OsString::from("9")]);
        assert_eq!(config.iterations, 3);
        assert_eq!(BenchConfig::from_args(Vec::new()).iterations, 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_from_args_non_utf8_falls_back() {
        use std::os::unix::ffi::OsStringExt;
        let config = BenchConfig::from_args(vec![OsString::from_vec(vec![0xff, 0x31])]);
        assert_eq!(config.iterations, DEFAULT_ITERATIONS);
    }

    proptest! {
        #[test]
        fn parse_iterations_accepts_any_u64(n in any::<u64>()) {
            prop_assert_eq!(parse_iterations(Some(&n.to_string())), n);
        }

        #[test]
        fn parse_iterations_never_panics(s in ".*") {
            let _ = parse_iterations(Some(&s));
        }

        #[test]
        fn non_digit_input_is_default(s in "[a-zA-Z_ ]*") {
            prop_assert_eq!(parse_iterations(Some(&s)), DEFAULT_ITERATIONS);
        }
    }
}
