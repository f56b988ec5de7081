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

//! Error types for language detection.

use thiserror::Error;

/// Result type for detection operations.
pub type Result<T> = std::result::Result<T, DetectError>;

/// Errors raised by the language catalogue, the strategies and the classifier.
///
/// Implements `Clone` because a sample caches the outcome of decoding its
/// lines, failures included, and hands the same error to every strategy that
/// asks for them until the cache is reset.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DetectError {
    /// The embedded language catalogue or heuristics rules are invalid.
    #[error("Invalid catalogue data in {source_name}: {message}")]
    Catalogue {
        /// Name of the data file being loaded
        source_name: String,
        /// What was wrong with it
        message: String,
    },

    /// A heuristics pattern failed to compile.
    #[error("Invalid pattern for {language}: {message}")]
    InvalidPattern {
        /// Language the rule would select
        language: String,
        /// Regex compiler message
        message: String,
    },

    /// Content could not be decoded in its detected encoding.
    #[error("Malformed content: {reason}")]
    Malformed {
        /// Why decoding failed
        reason: String,
    },
}

impl DetectError {
    /// Creates a catalogue error for the named data file.
    pub fn catalogue(source_name: &str, message: impl ToString) -> Self {
        DetectError::Catalogue {
            source_name: source_name.to_string(),
            message: message.to_string(),
        }
    }

    /// Creates a decoding error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        DetectError::Malformed {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DetectError::catalogue("languages.yml", "duplicate language 'Go'");
        let msg = err.to_string();
        assert!(msg.contains("languages.yml"));
        assert!(msg.contains("duplicate language 'Go'"));

        let err = DetectError::malformed("odd UTF-16 payload length");
        assert_eq!(err.to_string(), "Malformed content: odd UTF-16 payload length");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(DetectError::malformed("x"), DetectError::malformed("x"));
        assert_ne!(DetectError::malformed("x"), DetectError::malformed("y"));
    }
}
