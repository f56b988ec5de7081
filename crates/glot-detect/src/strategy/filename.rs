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

//! Detection by exact file name.

use super::{language_names, SampleStrategy};
use crate::blob::Blob;
use crate::error::Result;
use crate::language::LanguageSet;

/// Matches file names such as `Makefile` or `Gemfile`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Filename;

impl SampleStrategy for Filename {
    fn name(&self) -> &'static str {
        "filename"
    }

    fn call(&self, blob: &dyn Blob, candidates: &LanguageSet) -> Result<Vec<String>> {
        Ok(language_names(candidates.find_by_filename(blob.name())))
    }
}
