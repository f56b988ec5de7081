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

//! The language catalogue.
//!
//! The catalogue is the candidate universe every strategy resolves against.
//! It is parsed once from the embedded `languages.yml` and then only read.

use crate::error::{DetectError, Result};
use serde::Deserialize;
use std::collections::HashMap;

const CATALOGUE_NAME: &str = "languages.yml";
const CATALOGUE: &str = include_str!("../data/languages.yml");

/// A catalogued language and the names it is known by.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Language {
    /// Canonical name, e.g. `"C++"`.
    pub name: String,
    /// Alternative names accepted in modelines.
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Extensions including the leading dot.
    #[serde(default)]
    pub extensions: Vec<String>,
    /// Exact file names.
    #[serde(default)]
    pub filenames: Vec<String>,
    /// Interpreter names found in shebang lines.
    #[serde(default)]
    pub interpreters: Vec<String>,
}

/// The immutable set of known languages with lookup indexes.
///
/// Lookups return indexes in catalogue order so results are stable.
#[derive(Debug, Clone)]
pub struct LanguageSet {
    languages: Vec<Language>,
    by_name: HashMap<String, usize>,
    by_alias: HashMap<String, usize>,
    by_extension: HashMap<String, Vec<usize>>,
    by_filename: HashMap<String, Vec<usize>>,
    by_interpreter: HashMap<String, Vec<usize>>,
}

/// Loads the embedded language catalogue.
///
/// Called once per run; the returned set is shared by reference with every
/// strategy invocation.
pub fn load_language_candidates() -> Result<LanguageSet> {
    LanguageSet::from_yaml(CATALOGUE)
}

impl LanguageSet {
    /// Parses a catalogue from YAML text.
    pub fn from_yaml(source: &str) -> Result<Self> {
        let languages: Vec<Language> = serde_yaml::from_str(source)
            .map_err(|e| DetectError::catalogue(CATALOGUE_NAME, e))?;
        Self::new(languages)
    }

    /// Builds the lookup indexes over a list of languages.
    pub fn new(languages: Vec<Language>) -> Result<Self> {
        let mut set = Self {
            languages: Vec::with_capacity(languages.len()),
            by_name: HashMap::new(),
            by_alias: HashMap::new(),
            by_extension: HashMap::new(),
            by_filename: HashMap::new(),
            by_interpreter: HashMap::new(),
        };

        for language in languages {
            if language.name.trim().is_empty() {
                return Err(DetectError::catalogue(CATALOGUE_NAME, "language with empty name"));
            }
            let idx = set.languages.len();
            let key = language.name.to_lowercase();
            if set.by_name.insert(key, idx).is_some() {
                return Err(DetectError::catalogue(
                    CATALOGUE_NAME,
                    format!("duplicate language '{}'", language.name),
                ));
            }
            for alias in &language.aliases {
                set.by_alias.entry(alias.to_lowercase()).or_insert(idx);
            }
            for ext in &language.extensions {
                push_index(&mut set.by_extension, ext.to_lowercase(), idx);
            }
            for filename in &language.filenames {
                push_index(&mut set.by_filename, filename.clone(), idx);
            }
            for interpreter in &language.interpreters {
                push_index(&mut set.by_interpreter, interpreter.clone(), idx);
            }
            set.languages.push(language);
        }

        Ok(set)
    }

    /// Returns the number of languages.
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Returns whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Iterates languages in catalogue order.
    pub fn iter(&self) -> impl Iterator<Item = &Language> {
        self.languages.iter()
    }

    /// Finds a language by its canonical name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&Language> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&idx| &self.languages[idx])
    }

    /// Returns whether `name` is a canonical language name in this set.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Finds a language by canonical name or alias (case-insensitive).
    pub fn find_by_alias(&self, alias: &str) -> Option<&Language> {
        let key = alias.to_lowercase();
        self.by_name
            .get(&key)
            .or_else(|| self.by_alias.get(&key))
            .map(|&idx| &self.languages[idx])
    }

    /// Languages declaring exactly this extension (case-insensitive).
    pub fn find_by_extension(&self, extension: &str) -> Vec<&Language> {
        self.resolve(self.by_extension.get(&extension.to_lowercase()))
    }

    /// Languages declaring this exact file name.
    pub fn find_by_filename(&self, filename: &str) -> Vec<&Language> {
        self.resolve(self.by_filename.get(filename))
    }

    /// Languages run by this interpreter.
    pub fn find_by_interpreter(&self, interpreter: &str) -> Vec<&Language> {
        self.resolve(self.by_interpreter.get(interpreter))
    }

    fn resolve(&self, indexes: Option<&Vec<usize>>) -> Vec<&Language> {
        indexes
            .map(|idxs| idxs.iter().map(|&idx| &self.languages[idx]).collect())
            .unwrap_or_default()
    }
}

fn push_index(index: &mut HashMap<String, Vec<usize>>, key: String, idx: usize) {
    let slot = index.entry(key).or_default();
    if !slot.contains(&idx) {
        slot.push(idx);
    }
}

/// Candidate extensions of a file name, longest first.
///
/// `"foo.d.ts"` yields `[".d.ts", ".ts"]`; a dot-file such as `".bashrc"`
/// yields `[".bashrc"]`.
pub fn extensions_of(name: &str) -> Vec<String> {
    let lower = name.to_lowercase();
    lower
        .char_indices()
        .filter(|&(_, c)| c == '.')
        .map(|(i, _)| lower[i..].to_string())
        .filter(|ext| ext.len() > 1)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(languages: Vec<&Language>) -> Vec<&str> {
        languages.iter().map(|l| l.name.as_str()).collect()
    }

    #[test]
    fn test_embedded_catalogue_loads() {
        let set = load_language_candidates().unwrap();
        assert!(set.len() > 20);
        assert!(set.contains("Python"));
        assert!(set.contains("shell"));
        assert!(!set.contains("Brainfuck"));
    }

    #[test]
    fn test_alias_lookup() {
        let set = load_language_candidates().unwrap();
        assert_eq!(set.find_by_alias("cpp").unwrap().name, "C++");
        assert_eq!(set.find_by_alias("JS").unwrap().name, "JavaScript");
        assert_eq!(set.find_by_alias("python").unwrap().name, "Python");
        assert!(set.find_by_alias("nope").is_none());
        // aliases do not count as canonical names
        assert!(!set.contains("cpp"));
    }

    #[test]
    fn test_extension_lookup_is_ambiguous_where_catalogue_is() {
        let set = load_language_candidates().unwrap();
        assert_eq!(names(set.find_by_extension(".py")), vec!["Python"]);
        assert_eq!(names(set.find_by_extension(".PL")), vec!["Perl", "Prolog"]);
        assert_eq!(
            names(set.find_by_extension(".h")),
            vec!["C", "C++", "Objective-C"]
        );
        assert!(set.find_by_extension(".nothing").is_empty());
    }

    #[test]
    fn test_filename_and_interpreter_lookup() {
        let set = load_language_candidates().unwrap();
        assert_eq!(names(set.find_by_filename("Makefile")), vec!["Makefile"]);
        assert_eq!(names(set.find_by_filename("Gemfile")), vec!["Ruby"]);
        assert_eq!(names(set.find_by_interpreter("bash")), vec!["Shell"]);
        assert!(set.find_by_interpreter("cobc").is_empty());
    }

    #[test]
    fn test_duplicate_language_rejected() {
        let yaml = "- name: Go\n- name: go\n";
        let err = LanguageSet::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("duplicate language"));
    }

    #[test]
    fn test_malformed_yaml_rejected() {
        let err = LanguageSet::from_yaml("- name: [unterminated").unwrap_err();
        assert!(matches!(err, DetectError::Catalogue { .. }));
    }

    #[test]
    fn test_extensions_of() {
        assert_eq!(extensions_of("foo.d.ts"), vec![".d.ts", ".ts"]);
        assert_eq!(extensions_of("Main.C"), vec![".c"]);
        assert_eq!(extensions_of(".bashrc"), vec![".bashrc"]);
        assert!(extensions_of("Makefile").is_empty());
        assert!(extensions_of("trailing.").is_empty());
    }
}
