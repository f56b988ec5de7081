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

//! Core benchmark infrastructure.
//!
//! - `config`: run configuration and argument parsing
//! - `measurement`: lap timing and statistics
//! - `registry`: the ordered list of strategies under test

pub mod config;
pub mod measurement;
pub mod registry;

pub use config::{parse_iterations, BenchConfig, Mode, DEFAULT_CORPUS_ROOT, DEFAULT_ITERATIONS};
pub use measurement::{compute_statistics, time_call, CallFailure, Measurement, Statistics};
pub use registry::{Context, Kind, RegisteredStrategy, Registry};
