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

//! Sample strategies.
//!
//! Every strategy answers one question about a blob ("which languages use
//! this extension?", "what does the shebang say?") and resolves the answer
//! against the candidate set it is given. An empty result means the strategy
//! has no opinion.
//!
//! - `extension`: languages declaring the file's extension
//! - `filename`: languages declaring the exact file name
//! - `shebang`: interpreter named on a `#!` first line
//! - `modeline`: Emacs and Vim modelines
//! - `heuristics`: content rules for ambiguous extensions

pub mod extension;
pub mod filename;
pub mod heuristics;
pub mod modeline;
pub mod shebang;

pub use extension::Extension;
pub use filename::Filename;
pub use heuristics::Heuristics;
pub use modeline::Modeline;
pub use shebang::{interpreter, Shebang};

use crate::blob::Blob;
use crate::error::Result;
use crate::language::{Language, LanguageSet};

/// A language identification strategy over a single blob.
pub trait SampleStrategy {
    /// Short name of the strategy.
    fn name(&self) -> &'static str;

    /// Returns the candidate languages for `blob`, possibly none.
    ///
    /// May populate the blob's cached views as a side effect.
    fn call(&self, blob: &dyn Blob, candidates: &LanguageSet) -> Result<Vec<String>>;
}

pub(crate) fn language_names(languages: Vec<&Language>) -> Vec<String> {
    languages.into_iter().map(|l| l.name.clone()).collect()
}
