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

//! Error types for benchmark runs.
//!
//! Corpus loading failures are fatal and abort the run. Strategy failures
//! are isolated: the driver records them on the failing report and keeps
//! going.

use glot_detect::DetectError;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for benchmarking operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur during benchmarking operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BenchError {
    /// Corpus root missing or unreadable, or a sample file unreadable.
    #[error("Filesystem error for '{}': {}", .path.display(), .message)]
    Filesystem {
        /// Path that could not be read
        path: PathBuf,
        /// Underlying I/O error message
        message: String,
    },

    /// A strategy or the classifier failed during a measured call.
    #[error("{strategy} failed on {target}: {reason}")]
    Strategy {
        /// Strategy label
        strategy: String,
        /// Sample label or `total`
        target: String,
        /// Error message or panic payload
        reason: String,
    },

    /// Language catalogue or heuristics rules could not be loaded.
    #[error("Detection setup failed: {0}")]
    Detect(#[from] DetectError),

    /// Writing a report to its sink failed.
    #[error("Report output failed: {0}")]
    Report(String),
}

impl BenchError {
    /// Wraps an I/O error with the path it concerns.
    pub fn filesystem(path: &Path, err: io::Error) -> Self {
        BenchError::Filesystem {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }
}

impl From<io::Error> for BenchError {
    fn from(err: io::Error) -> Self {
        BenchError::Report(err.to_string())
    }
}
