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

//! Glot language detection
//!
//! The identification strategies the glot benchmark harness measures.
//!
//! ## Strategies
//!
//! - **Sample strategies** ([`SampleStrategy`]): take a [`Blob`] and the
//!   [`LanguageSet`] of candidates and return the languages they point at.
//!   Implemented by extension, file name, shebang, modeline and content
//!   heuristics.
//! - **Classifier** ([`ContentClassifier`]): takes [`CorpusStatistics`] and
//!   raw bytes and ranks every trained language.
//!
//! ## Usage
//!
//! ```no_run
//! use glot_detect::{load_language_candidates, Blob, SampleStrategy, Shebang};
//!
//! fn languages_of(blob: &dyn Blob) -> glot_detect::Result<Vec<String>> {
//!     let candidates = load_language_candidates()?;
//!     Shebang.call(blob, &candidates)
//! }
//! ```

pub mod blob;
pub mod classifier;
pub mod error;
pub mod language;
pub mod strategy;
pub mod tokenizer;

pub use blob::{decode_lines, detect_encoding, mime_type_for, Blob, Encoding};
pub use classifier::{ContentClassifier, CorpusStatistics, NaiveBayes};
pub use error::{DetectError, Result};
pub use language::{load_language_candidates, Language, LanguageSet};
pub use strategy::{Extension, Filename, Heuristics, Modeline, SampleStrategy, Shebang};
pub use tokenizer::tokenize;
