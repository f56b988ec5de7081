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

//! Detection by Emacs and Vim modelines.

use super::SampleStrategy;
use crate::blob::Blob;
use crate::error::Result;
use crate::language::LanguageSet;
use once_cell::sync::Lazy;
use regex::Regex;

/// Modelines are only honoured this many lines from either end of the file.
pub const SEARCH_SCOPE: usize = 5;

static EMACS_MODELINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-\*-(.+?)-\*-").expect("valid emacs modeline regex"));

static VIM_MODELINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|\s)(?:vi|vim|Vim|ex)m?\d*(?:[<=>]\d+)?:\s*(.*)")
        .expect("valid vim modeline regex")
});

static VIM_FILETYPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:ft|filetype|syntax)\s*=\s*([\w+#.-]+)").expect("valid vim option regex")
});

/// Reads the language named by an editor modeline.
#[derive(Debug, Default, Clone, Copy)]
pub struct Modeline;

impl SampleStrategy for Modeline {
    fn name(&self) -> &'static str {
        "modeline"
    }

    fn call(&self, blob: &dyn Blob, candidates: &LanguageSet) -> Result<Vec<String>> {
        let lines = blob.lines()?;
        let head = lines.iter().take(SEARCH_SCOPE);
        let tail = lines
            .iter()
            .skip(lines.len().saturating_sub(SEARCH_SCOPE).max(SEARCH_SCOPE));

        for line in head.chain(tail) {
            if let Some(mode) = emacs_mode(line).or_else(|| vim_mode(line)) {
                return Ok(candidates
                    .find_by_alias(&mode)
                    .map(|language| vec![language.name.clone()])
                    .unwrap_or_default());
            }
        }
        Ok(Vec::new())
    }
}

/// Mode named in an Emacs `-*- ... -*-` line.
///
/// Accepts both `-*- mode: ruby; tab-width: 2 -*-` and the bare `-*- ruby -*-`.
pub fn emacs_mode(line: &str) -> Option<String> {
    let body = EMACS_MODELINE.captures(line)?.get(1)?.as_str();

    let mut bare = None;
    for part in body.split(';').map(str::trim).filter(|p| !p.is_empty()) {
        match part.split_once(':') {
            Some((key, value)) if key.trim().eq_ignore_ascii_case("mode") => {
                return Some(value.trim().to_string());
            }
            Some(_) => {}
            None => bare = bare.or(Some(part)),
        }
    }
    bare.filter(|mode| !mode.contains(char::is_whitespace))
        .map(str::to_string)
}

/// File type set by a Vim modeline.
///
/// Returns `None` when no type is set or when `ft`, `filetype` and `syntax`
/// disagree.
pub fn vim_mode(line: &str) -> Option<String> {
    let options = VIM_MODELINE.captures(line)?.get(1)?.as_str();

    let mut found: Option<&str> = None;
    for caps in VIM_FILETYPE.captures_iter(options) {
        let value = caps.get(1)?.as_str();
        match found {
            Some(prev) if !prev.eq_ignore_ascii_case(value) => return None,
            _ => found = Some(value),
        }
    }
    found.map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blob::testing::MemoryBlob;
    use crate::error::DetectError;
    use crate::language::load_language_candidates;

    #[test]
    fn test_emacs_mode() {
        assert_eq!(emacs_mode("// -*- mode: C++ -*-").as_deref(), Some("C++"));
        assert_eq!(
            emacs_mode("# -*- coding: utf-8; mode: ruby; tab-width: 2 -*-").as_deref(),
            Some("ruby")
        );
        assert_eq!(emacs_mode(";; -*- fundamental -*-").as_deref(), Some("fundamental"));
        assert_eq!(emacs_mode("# -*- coding: utf-8 -*-"), None);
        assert_eq!(emacs_mode("no modeline here"), None);
    }

    #[test]
    fn test_vim_mode() {
        assert_eq!(
            vim_mode("/* vim: set syntax=python ft   =python filetype=python */").as_deref(),
            Some("python")
        );
        assert_eq!(vim_mode("# vim: set syntax=ruby ft  =python filetype=perl :"), None);
        assert_eq!(
            vim_mode("/* vim: set shiftwidth=4 softtabstop=0 cindent cinoptions={1s: */"),
            None
        );
        assert_eq!(vim_mode("// vim: ft=javascript").as_deref(), Some("javascript"));
        assert_eq!(vim_mode("environment: ft=ruby"), None);
    }

    #[test]
    fn test_modeline_strategy() {
        let set = load_language_candidates().unwrap();
        let call = |data: &str| Modeline.call(&MemoryBlob::new("x/file", data), &set);

        assert_eq!(call("// -*- mode: C++ -*-\nint x;").unwrap(), vec!["C++"]);
        assert_eq!(call("# vim: ft=ruby\nputs 1\n").unwrap(), vec!["Ruby"]);
        assert_eq!(call("-*- fundamental -*-").unwrap(), vec!["Text"]);
        assert!(call("int main() {}\n").unwrap().is_empty());
        assert!(call("").unwrap().is_empty());
        assert!(call("// vim: ft=cobol").unwrap().is_empty());
    }

    #[test]
    fn test_modeline_in_footer() {
        let set = load_language_candidates().unwrap();
        let mut content = "x\n".repeat(20);
        content.push_str("# vim: set filetype=perl :\n");
        let result = Modeline.call(&MemoryBlob::new("x/file", content), &set).unwrap();
        assert_eq!(result, vec!["Perl"]);

        let mut content = "x\n".repeat(6);
        content.push_str("// vim: ft=javascript\n");
        content.push_str(&"x\n".repeat(6));
        let result = Modeline.call(&MemoryBlob::new("x/file", content), &set).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_modeline_propagates_decoding_errors() {
        let set = load_language_candidates().unwrap();
        let blob = MemoryBlob::new("x/file", &b"\xFF\xFEa\x00b"[..]);
        let err = Modeline.call(&blob, &set).unwrap_err();
        assert!(matches!(err, DetectError::Malformed { .. }));
    }
}
