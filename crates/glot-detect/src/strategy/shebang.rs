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

//! Detection by `#!` interpreter line.

use super::{language_names, SampleStrategy};
use crate::blob::Blob;
use crate::error::Result;
use crate::language::LanguageSet;

/// Resolves the interpreter named on the first line of a script.
#[derive(Debug, Default, Clone, Copy)]
pub struct Shebang;

impl SampleStrategy for Shebang {
    fn name(&self) -> &'static str {
        "shebang"
    }

    fn call(&self, blob: &dyn Blob, candidates: &LanguageSet) -> Result<Vec<String>> {
        if blob.encoding().is_binary() {
            return Ok(Vec::new());
        }
        Ok(interpreter(blob.data())
            .map(|script| language_names(candidates.find_by_interpreter(&script)))
            .unwrap_or_default())
    }
}

/// Extracts the interpreter name from a shebang line.
///
/// `#!/usr/bin/env -S A=B python3.11 -u` yields `python`: `env` is looked
/// through (skipping flags and assignments), the directory is dropped and a
/// trailing version is stripped.
pub fn interpreter(data: &[u8]) -> Option<String> {
    let rest = data.strip_prefix(b"#!")?;
    let end = rest.iter().position(|&b| b == b'\n').unwrap_or(rest.len());
    let line = String::from_utf8_lossy(&rest[..end]);

    let mut words = line.split_whitespace();
    let mut script = basename(words.next()?);
    if script == "env" {
        script = words
            .find(|word| !word.starts_with('-') && !word.contains('='))
            .map(basename)?;
    }

    let script = script.trim_end_matches(|c: char| c.is_ascii_digit() || c == '.');
    if script.is_empty() {
        None
    } else {
        Some(script.to_string())
    }
}

fn basename(word: &str) -> &str {
    word.rsplit('/').next().unwrap_or(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blob::testing::MemoryBlob;
    use crate::language::load_language_candidates;

    #[test]
    fn test_interpreter() {
        assert_eq!(interpreter(b"#!/bin/sh\necho hi").as_deref(), Some("sh"));
        assert_eq!(interpreter(b"#!/usr/bin/env node").as_deref(), Some("node"));
        assert_eq!(interpreter(b"#! /usr/bin/python2.7\n").as_deref(), Some("python"));
        assert_eq!(
            interpreter(b"#!/usr/bin/env -S A=B foo=bar awk -f\n").as_deref(),
            Some("awk")
        );
        assert_eq!(interpreter(b"#!/usr/bin/env\n"), None);
        assert_eq!(interpreter(b"#!\n"), None);
        assert_eq!(interpreter(b"print(1)"), None);
        assert_eq!(interpreter(b""), None);
    }

    #[test]
    fn test_shebang_strategy() {
        let set = load_language_candidates().unwrap();
        let call = |data: &[u8]| Shebang.call(&MemoryBlob::new("x/script", data), &set).unwrap();

        assert_eq!(call(b"#!/bin/sh\necho hi"), vec!["Shell"]);
        assert_eq!(call(b"#!/usr/bin/env ruby\nputs 1"), vec!["Ruby"]);
        assert_eq!(call(b"#!/usr/bin/env python3\n"), vec!["Python"]);
        assert!(call(b"#!/usr/bin/cobc\n").is_empty());
        assert!(call(b"print(1)").is_empty());
        assert!(call(b"#!/bin/sh\n\x00\x00").is_empty());
    }
}
