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

//! Detection by content rules for ambiguous extensions.

use super::SampleStrategy;
use crate::blob::Blob;
use crate::error::{DetectError, Result};
use crate::language::{extensions_of, LanguageSet};
use regex::Regex;
use serde::Deserialize;
use tracing::debug;

const RULES_NAME: &str = "heuristics.yml";
const RULES: &str = include_str!("../../data/heuristics.yml");

#[derive(Debug, Deserialize)]
struct RawDisambiguation {
    extensions: Vec<String>,
    rules: Vec<RawRule>,
}

#[derive(Debug, Deserialize)]
struct RawRule {
    language: String,
    #[serde(default)]
    pattern: Option<String>,
}

/// One compiled rule: if `pattern` matches (or is absent), pick `language`.
#[derive(Debug, Clone)]
pub struct Rule {
    language: String,
    pattern: Option<Regex>,
}

impl Rule {
    /// Language this rule selects.
    pub fn language(&self) -> &str {
        &self.language
    }

    fn matches(&self, content: &str) -> bool {
        self.pattern
            .as_ref()
            .map_or(true, |pattern| pattern.is_match(content))
    }
}

#[derive(Debug, Clone)]
struct Disambiguation {
    extensions: Vec<String>,
    rules: Vec<Rule>,
}

/// Content heuristics, compiled once from the embedded rules file.
#[derive(Debug, Clone)]
pub struct Heuristics {
    disambiguations: Vec<Disambiguation>,
}

impl Heuristics {
    /// Compiles the embedded rules.
    pub fn load() -> Result<Self> {
        Self::from_yaml(RULES)
    }

    /// Compiles rules from YAML text.
    pub fn from_yaml(source: &str) -> Result<Self> {
        let raw: Vec<RawDisambiguation> =
            serde_yaml::from_str(source).map_err(|e| DetectError::catalogue(RULES_NAME, e))?;

        let disambiguations = raw
            .into_iter()
            .map(|d| {
                let rules = d
                    .rules
                    .into_iter()
                    .map(compile_rule)
                    .collect::<Result<Vec<_>>>()?;
                Ok(Disambiguation {
                    extensions: d.extensions.iter().map(|e| e.to_lowercase()).collect(),
                    rules,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { disambiguations })
    }

    /// Rules that apply to a file name, in evaluation order.
    pub fn rules_for(&self, name: &str) -> &[Rule] {
        extensions_of(name)
            .iter()
            .find_map(|ext| {
                self.disambiguations
                    .iter()
                    .find(|d| d.extensions.contains(ext))
            })
            .map(|d| d.rules.as_slice())
            .unwrap_or(&[])
    }
}

fn compile_rule(raw: RawRule) -> Result<Rule> {
    let pattern = raw
        .pattern
        .map(|p| {
            Regex::new(&format!("(?m){}", p)).map_err(|e| DetectError::InvalidPattern {
                language: raw.language.clone(),
                message: e.to_string(),
            })
        })
        .transpose()?;
    Ok(Rule {
        language: raw.language,
        pattern,
    })
}

impl SampleStrategy for Heuristics {
    fn name(&self) -> &'static str {
        "heuristics"
    }

    fn call(&self, blob: &dyn Blob, candidates: &LanguageSet) -> Result<Vec<String>> {
        let rules = self.rules_for(blob.name());
        if rules.is_empty() {
            return Ok(Vec::new());
        }

        let content = blob.lines()?.join("\n");
        let winner = rules
            .iter()
            .filter(|rule| candidates.contains(rule.language()))
            .find(|rule| rule.matches(&content));

        debug!(
            path = %blob.path().display(),
            language = winner.map(Rule::language),
            "heuristics evaluated"
        );
        Ok(winner
            .map(|rule| vec![rule.language().to_string()])
            .unwrap_or_default())
    }
}
