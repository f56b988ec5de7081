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

//! Corpus loading.
//!
//! Walks the corpus root with `walkdir`, which keeps its own stack of open
//! directories instead of recursing. Entries of each directory are visited
//! in file-name order, so the sample order is a stable depth-first
//! pre-order.

use crate::error::{BenchError, Result};
use crate::fixtures::sample::Sample;
use glot_detect::{Blob, CorpusStatistics, LanguageSet};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Ordered, fully loaded set of samples.
#[derive(Debug)]
pub struct Corpus {
    root: PathBuf,
    samples: Vec<Sample>,
}

impl Corpus {
    /// Loads every file below `root`, reading contents eagerly.
    ///
    /// Symlinks to files are loaded like files; symlinks to directories are
    /// not descended into. Fails if the root is missing, is not a directory,
    /// or if any directory or file below it cannot be read; no partial
    /// corpus is returned.
    pub fn load(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let meta = fs::metadata(root).map_err(|e| BenchError::filesystem(root, e))?;
        if !meta.is_dir() {
            return Err(BenchError::Filesystem {
                path: root.to_path_buf(),
                message: "corpus root is not a directory".to_string(),
            });
        }

        let walker = WalkDir::new(root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name();

        let mut samples = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| walk_error(root, e))?;
            let path = entry.path();
            let target = fs::metadata(path).map_err(|e| BenchError::filesystem(path, e))?;
            if target.is_dir() {
                if entry.path_is_symlink() {
                    debug!(path = %path.display(), "skipping directory symlink");
                }
                continue;
            }
            samples.push(Sample::load(root, path)?);
        }

        info!(root = %root.display(), samples = samples.len(), "corpus loaded");
        Ok(Self {
            root: root.to_path_buf(),
            samples,
        })
    }

    /// Builds a corpus from samples already in memory.
    pub fn from_samples(root: impl Into<PathBuf>, samples: Vec<Sample>) -> Self {
        Self {
            root: root.into(),
            samples,
        }
    }

    /// The directory the corpus was loaded from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns whether the corpus has no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples in load order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Mutable access for resetting sample caches.
    pub fn samples_mut(&mut self) -> &mut [Sample] {
        &mut self.samples
    }

    /// Sample paths in load order.
    pub fn paths(&self) -> Vec<&Path> {
        self.samples.iter().map(|s| s.path()).collect()
    }

    /// Trains classifier statistics on the corpus.
    ///
    /// A sample counts as training data for a language when its first path
    /// component below the root names a catalogued language, as in a
    /// `samples/<Language>/...` layout. Other samples are ignored. Cached
    /// views are not touched.
    pub fn statistics(&self, languages: &LanguageSet) -> CorpusStatistics {
        let training = self.samples.iter().filter_map(|sample| {
            let language = language_dir(sample.relative_path(), languages)?;
            Some((language, sample.data()))
        });
        let statistics = CorpusStatistics::train(training);
        debug!(
            samples = statistics.sample_count(),
            languages = statistics.language_count(),
            "classifier statistics trained"
        );
        statistics
    }
}

fn language_dir<'l>(relative: &Path, languages: &'l LanguageSet) -> Option<&'l str> {
    let mut components = relative.components();
    let first = match components.next()? {
        Component::Normal(name) => name.to_str()?,
        _ => return None,
    };
    // a file directly under the root is not inside a language directory
    components.next()?;
    languages.get(first).map(|language| language.name.as_str())
}

fn walk_error(root: &Path, err: walkdir::Error) -> BenchError {
    BenchError::Filesystem {
        path: err.path().unwrap_or(root).to_path_buf(),
        message: err.to_string(),
    }
}
