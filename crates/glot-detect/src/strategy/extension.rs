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

//! Detection by file extension.

use super::{language_names, SampleStrategy};
use crate::blob::Blob;
use crate::error::Result;
use crate::language::{extensions_of, LanguageSet};

/// Matches the longest extension of the file name any candidate declares.
#[derive(Debug, Default, Clone, Copy)]
pub struct Extension;

impl SampleStrategy for Extension {
    fn name(&self) -> &'static str {
        "extension"
    }

    fn call(&self, blob: &dyn Blob, candidates: &LanguageSet) -> Result<Vec<String>> {
        for ext in extensions_of(blob.name()) {
            let found = candidates.find_by_extension(&ext);
            if !found.is_empty() {
                return Ok(language_names(found));
            }
        }
        Ok(Vec::new())
    }
}
