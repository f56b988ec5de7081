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

//! `glot-bench [ITERATIONS]`
//!
//! Benchmarks every detection strategy over `.linguist/samples`, printing
//! reports to stdout and logs to stderr.

use glot_bench::{BenchConfig, ConsoleReporter};
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const LOG_DIRECTIVES: &str = "glot_bench=info,glot_detect=warn";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(LOG_DIRECTIVES))
        .with_writer(io::stderr)
        .init();

    let config = BenchConfig::from_args(std::env::args_os().skip(1));
    let mut reporter = ConsoleReporter::new(io::stdout().lock());

    match glot_bench::run(&config, &mut reporter) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
