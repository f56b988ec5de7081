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

//! Sample records.
//!
//! A [`Sample`] holds one corpus file fully in memory together with the
//! views strategies derive from it. Derived views are cached on first use
//! and dropped by [`Sample::reset`], so every measured invocation starts from
//! the state the sample had right after loading.

use crate::error::{BenchError, Result};
use glot_detect::{decode_lines, detect_encoding, mime_type_for, Blob, DetectError, Encoding};
use once_cell::unsync::OnceCell;
use std::path::{Path, PathBuf};

/// Views computed by strategies and cached until the next reset.
#[derive(Debug, Default)]
struct SampleCache {
    encoding: OnceCell<Encoding>,
    lines: OnceCell<std::result::Result<Vec<String>, DetectError>>,
    mime_type: OnceCell<&'static str>,
}

impl SampleCache {
    fn is_empty(&self) -> bool {
        self.encoding.get().is_none()
            && self.lines.get().is_none()
            && self.mime_type.get().is_none()
    }
}

/// One file of the benchmark corpus.
#[derive(Debug)]
pub struct Sample {
    path: PathBuf,
    relative: PathBuf,
    label: String,
    data: Vec<u8>,
    cache: SampleCache,
}

impl Sample {
    /// Creates a sample from content already in memory.
    pub fn new(path: impl Into<PathBuf>, data: impl Into<Vec<u8>>) -> Self {
        let path = path.into();
        Self {
            relative: path.clone(),
            label: label_for(&path),
            path,
            data: data.into(),
            cache: SampleCache::default(),
        }
    }

    /// Reads a sample file fully into memory.
    ///
    /// `root` is the corpus root the file was found under; it is used to
    /// derive [`Sample::relative_path`].
    pub fn load(root: &Path, path: &Path) -> Result<Self> {
        let data = std::fs::read(path).map_err(|e| BenchError::filesystem(path, e))?;
        let mut sample = Self::new(path, data);
        if let Ok(relative) = path.strip_prefix(root) {
            sample.relative = relative.to_path_buf();
        }
        Ok(sample)
    }

    /// Path relative to the corpus root.
    pub fn relative_path(&self) -> &Path {
        &self.relative
    }

    /// Report identifier: the path with whitespace replaced by `_`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Discards every cached view, leaving path and content untouched.
    pub fn reset(&mut self) {
        self.cache = SampleCache::default();
    }

    /// Returns whether no view is currently cached.
    pub fn is_clean(&self) -> bool {
        self.cache.is_empty()
    }
}

impl Blob for Sample {
    fn path(&self) -> &Path {
        &self.path
    }

    fn data(&self) -> &[u8] {
        &self.data
    }

    fn encoding(&self) -> Encoding {
        *self.cache.encoding.get_or_init(|| detect_encoding(&self.data))
    }

    fn lines(&self) -> glot_detect::Result<&[String]> {
        self.cache
            .lines
            .get_or_init(|| decode_lines(&self.data, self.encoding()))
            .as_deref()
            .map_err(Clone::clone)
    }

    fn mime_type(&self) -> &str {
        self.cache
            .mime_type
            .get_or_init(|| mime_type_for(self.name(), self.encoding()))
    }
}

fn label_for(path: &Path) -> String {
    path.to_string_lossy()
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glot_detect::{load_language_candidates, Modeline, SampleStrategy};

    #[test]
    fn test_label_replaces_whitespace() {
        let sample = Sample::new("samples/Shell/my script\t.sh", "echo");
        assert_eq!(sample.label(), "samples/Shell/my_script_.sh");
    }

    #[test]
    fn test_views_are_cached_until_reset() {
        let mut sample = Sample::new("samples/a.py", "print(1)\n");
        assert!(sample.is_clean());

        assert_eq!(sample.encoding(), Encoding::Utf8);
        assert_eq!(sample.lines().unwrap(), ["print(1)"]);
        assert_eq!(sample.mime_type(), "text/plain");
        assert!(!sample.is_clean());

        sample.reset();
        assert!(sample.is_clean());
        assert_eq!(sample.data(), b"print(1)\n");
        assert_eq!(sample.path(), Path::new("samples/a.py"));
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut sample = Sample::new("a.sh", "#!/bin/sh\n");
        sample.reset();
        sample.reset();
        assert!(sample.is_clean());
    }

    #[test]
    fn test_strategy_results_survive_reset() {
        let languages = load_language_candidates().unwrap();
        let mut sample = Sample::new("x/file", "# vim: ft=ruby\nputs 1\n");

        let first = Modeline.call(&sample, &languages).unwrap();
        assert!(!sample.is_clean());
        sample.reset();
        let second = Modeline.call(&sample, &languages).unwrap();

        assert_eq!(first, vec!["Ruby"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_decoding_errors_are_cached() {
        let sample = Sample::new("x/file", &b"\xFF\xFEa\x00b"[..]);
        assert!(sample.lines().is_err());
        assert!(!sample.is_clean());
        assert!(sample.lines().is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err =
            Sample::load(Path::new("/nonexistent"), Path::new("/nonexistent/a.py")).unwrap_err();
        assert!(matches!(err, BenchError::Filesystem { .. }));
    }

    #[test]
    fn test_load_records_relative_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.py");
        std::fs::write(&path, "print(1)").unwrap();

        let sample = Sample::load(dir.path(), &path).unwrap();
        assert_eq!(sample.relative_path(), Path::new("a.py"));
        assert_eq!(sample.data(), b"print(1)");
        assert_eq!(sample.path(), path.as_path());
    }
}
