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

//! Strategy registry.
//!
//! An ordered list of labelled detection strategies. The standard registry
//! holds the content classifier followed by the five sample strategies; the
//! driver benchmarks them in registration order.

use crate::fixtures::Sample;
use glot_detect::{
    Blob, ContentClassifier, CorpusStatistics, Extension, Filename, Heuristics, LanguageSet,
    Modeline, NaiveBayes, SampleStrategy, Shebang,
};
use serde::Serialize;

/// Shared, read-only inputs of every strategy invocation.
#[derive(Debug)]
pub struct Context {
    /// Language universe passed as the candidate set.
    pub languages: LanguageSet,
    /// Statistics consulted by the classifier.
    pub statistics: CorpusStatistics,
}

impl Context {
    /// Creates a context.
    pub fn new(languages: LanguageSet, statistics: CorpusStatistics) -> Self {
        Self {
            languages,
            statistics,
        }
    }
}

/// Which contract a registered strategy follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Kind {
    /// `(sample, candidates) -> languages`.
    Sample,
    /// `(statistics, content) -> languages`.
    Classifier,
}

impl Kind {
    /// Returns the kind as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Sample => "sample",
            Kind::Classifier => "classifier",
        }
    }
}

enum Detector {
    Sample(Box<dyn SampleStrategy>),
    Classifier(Box<dyn ContentClassifier>),
}

/// A strategy together with its report label.
pub struct RegisteredStrategy {
    label: String,
    detector: Detector,
}

impl RegisteredStrategy {
    /// Label used in report names, e.g. `GetLanguagesByShebang`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Contract the strategy follows.
    pub fn kind(&self) -> Kind {
        match self.detector {
            Detector::Sample(_) => Kind::Sample,
            Detector::Classifier(_) => Kind::Classifier,
        }
    }

    /// Invokes the strategy once on a sample.
    ///
    /// Sample strategies receive the whole language universe as candidates;
    /// the classifier only sees the raw bytes.
    pub fn invoke(&self, sample: &Sample, context: &Context) -> glot_detect::Result<Vec<String>> {
        match &self.detector {
            Detector::Sample(strategy) => strategy.call(sample, &context.languages),
            Detector::Classifier(classifier) => {
                classifier.classify(&context.statistics, sample.data())
            }
        }
    }
}

impl std::fmt::Debug for RegisteredStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredStrategy")
            .field("label", &self.label)
            .field("kind", &self.kind())
            .finish()
    }
}

/// Ordered strategy registry.
#[derive(Debug, Default)]
pub struct Registry {
    strategies: Vec<RegisteredStrategy>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard lineup: `Classify`, then the modeline, filename,
    /// shebang, extension and content strategies.
    pub fn standard() -> glot_detect::Result<Self> {
        let mut registry = Self::new();
        registry
            .register_classifier("Classify", NaiveBayes)
            .register_sample("GetLanguagesByModeline", Modeline)
            .register_sample("GetLanguagesByFilename", Filename)
            .register_sample("GetLanguagesByShebang", Shebang)
            .register_sample("GetLanguagesByExtension", Extension)
            .register_sample("GetLanguagesByContent", Heuristics::load()?);
        Ok(registry)
    }

    /// Appends a sample strategy.
    pub fn register_sample(
        &mut self,
        label: impl Into<String>,
        strategy: impl SampleStrategy + 'static,
    ) -> &mut Self {
        self.strategies.push(RegisteredStrategy {
            label: label.into(),
            detector: Detector::Sample(Box::new(strategy)),
        });
        self
    }

    /// Appends a content classifier.
    pub fn register_classifier(
        &mut self,
        label: impl Into<String>,
        classifier: impl ContentClassifier + 'static,
    ) -> &mut Self {
        self.strategies.push(RegisteredStrategy {
            label: label.into(),
            detector: Detector::Classifier(Box::new(classifier)),
        });
        self
    }

    /// Number of registered strategies.
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Returns whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Strategies in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredStrategy> {
        self.strategies.iter()
    }

    /// Labels in registration order.
    pub fn labels(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.label()).collect()
    }
}
