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

//! Statistical classification over token frequencies.
//!
//! [`CorpusStatistics`] accumulates, per language, how often each token
//! occurs in a set of training samples. [`NaiveBayes`] scores content
//! against those statistics with a multinomial naive Bayes model using
//! Laplace smoothing.

use crate::error::Result;
use crate::tokenizer::tokenize;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Token counts for one language.
#[derive(Debug, Clone, Default)]
struct LanguageTokens {
    samples: u64,
    total: u64,
    counts: HashMap<String, u64>,
}

/// Accumulated token statistics of a training corpus.
#[derive(Debug, Clone, Default)]
pub struct CorpusStatistics {
    languages: BTreeMap<String, LanguageTokens>,
    vocabulary: HashSet<String>,
    samples: u64,
}

impl CorpusStatistics {
    /// Creates empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds statistics from `(language, content)` pairs.
    pub fn train<I, L, D>(samples: I) -> Self
    where
        I: IntoIterator<Item = (L, D)>,
        L: AsRef<str>,
        D: AsRef<[u8]>,
    {
        let mut statistics = Self::new();
        for (language, data) in samples {
            statistics.add_sample(language.as_ref(), data.as_ref());
        }
        statistics
    }

    /// Adds one training sample.
    pub fn add_sample(&mut self, language: &str, data: &[u8]) {
        let entry = self.languages.entry(language.to_string()).or_default();
        entry.samples += 1;
        for token in tokenize(data) {
            entry.total += 1;
            *entry.counts.entry(token.clone()).or_insert(0) += 1;
            self.vocabulary.insert(token);
        }
        self.samples += 1;
    }

    /// Returns whether no samples were added.
    pub fn is_empty(&self) -> bool {
        self.samples == 0
    }

    /// Number of training samples.
    pub fn sample_count(&self) -> u64 {
        self.samples
    }

    /// Number of distinct languages trained.
    pub fn language_count(&self) -> usize {
        self.languages.len()
    }

    /// Number of distinct tokens seen.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Trained language names in sorted order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    /// How often `token` occurred in samples of `language`.
    pub fn token_count(&self, language: &str, token: &str) -> u64 {
        self.languages
            .get(language)
            .and_then(|l| l.counts.get(token))
            .copied()
            .unwrap_or(0)
    }
}

/// A classifier over raw content and corpus statistics.
pub trait ContentClassifier {
    /// Short name of the classifier.
    fn name(&self) -> &'static str;

    /// Returns trained languages ordered from most to least likely.
    fn classify(&self, statistics: &CorpusStatistics, data: &[u8]) -> Result<Vec<String>>;
}

/// Multinomial naive Bayes classifier.
#[derive(Debug, Default, Clone, Copy)]
pub struct NaiveBayes;

impl NaiveBayes {
    /// Log-probability scores per language, unsorted.
    pub fn scores<'s>(
        &self,
        statistics: &'s CorpusStatistics,
        tokens: &[String],
    ) -> Vec<(&'s str, f64)> {
        let vocabulary = statistics.vocabulary.len().max(1) as f64;
        let samples = statistics.samples.max(1) as f64;

        statistics
            .languages
            .iter()
            .map(|(name, lang)| {
                let prior = (lang.samples as f64 / samples).ln();
                let denominator = lang.total as f64 + vocabulary;
                let likelihood: f64 = tokens
                    .iter()
                    .map(|token| {
                        let count = lang.counts.get(token).copied().unwrap_or(0) as f64;
                        ((count + 1.0) / denominator).ln()
                    })
                    .sum();
                (name.as_str(), prior + likelihood)
            })
            .collect()
    }
}

impl ContentClassifier for NaiveBayes {
    fn name(&self) -> &'static str {
        "naive-bayes"
    }

    fn classify(&self, statistics: &CorpusStatistics, data: &[u8]) -> Result<Vec<String>> {
        if statistics.is_empty() {
            return Ok(Vec::new());
        }

        let tokens = tokenize(data);
        let mut scored = self.scores(statistics, &tokens);
        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        Ok(scored.into_iter().map(|(name, _)| name.to_string()).collect())
    }
}
