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

//! Source tokenizer feeding the classifier.
//!
//! Produces the tokens the classifier counts: identifiers, bracket
//! characters, operator runs and `SHEBANG#!<interpreter>` markers. String
//! literals, numbers and comments are dropped.

use crate::strategy::interpreter;

/// Only this many leading bytes are tokenized.
pub const BYTE_LIMIT: usize = 100_000;

const BRACKETS: &[char] = &['(', ')', '[', ']', '{', '}', ';'];

/// Splits content into classifier tokens.
pub fn tokenize(data: &[u8]) -> Vec<String> {
    let data = &data[..data.len().min(BYTE_LIMIT)];
    let text = String::from_utf8_lossy(data);
    let chars: Vec<char> = text.chars().collect();
    Scanner {
        chars: &chars,
        pos: 0,
        tokens: Vec::new(),
    }
    .run()
}

struct Scanner<'a> {
    chars: &'a [char],
    pos: usize,
    tokens: Vec<String>,
}

impl Scanner<'_> {
    fn run(mut self) -> Vec<String> {
        while let Some(c) = self.peek(0) {
            if self.at_line_start() && self.looking_at("#!") {
                let line: String = self.chars[self.pos..self.line_end()].iter().collect();
                if let Some(script) = interpreter(line.as_bytes()) {
                    self.tokens.push(format!("SHEBANG#!{}", script));
                }
                self.pos = self.line_end();
            } else if c.is_whitespace() {
                self.pos += 1;
            } else if self.looking_at("//")
                || (c == '#' && self.peek(1).map_or(true, char::is_whitespace))
                || (self.looking_at("--") && self.peek(2).map_or(true, char::is_whitespace))
            {
                self.pos = self.line_end();
            } else if self.looking_at("/*") {
                self.skip_past("*/");
            } else if self.looking_at("<!--") {
                self.skip_past("-->");
            } else if c == '"' || c == '\'' {
                self.skip_string(c);
            } else if c.is_ascii_digit() {
                self.take_while(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_');
            } else if c.is_alphabetic() || c == '_' {
                let word = self.take_while(|c| c.is_alphanumeric() || c == '_');
                self.tokens.push(word);
            } else if BRACKETS.contains(&c) {
                self.tokens.push(c.to_string());
                self.pos += 1;
            } else if c.is_ascii_punctuation() {
                let op = self.take_while(|c| {
                    c.is_ascii_punctuation() && !BRACKETS.contains(&c) && c != '"' && c != '\''
                });
                self.tokens.push(op);
            } else {
                self.pos += 1;
            }
        }
        self.tokens
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn at_line_start(&self) -> bool {
        self.pos == 0 || self.chars[self.pos - 1] == '\n'
    }

    fn looking_at(&self, pattern: &str) -> bool {
        pattern
            .chars()
            .enumerate()
            .all(|(i, expected)| self.peek(i) == Some(expected))
    }

    fn line_end(&self) -> usize {
        self.chars[self.pos..]
            .iter()
            .position(|&c| c == '\n')
            .map_or(self.chars.len(), |offset| self.pos + offset)
    }

    fn skip_past(&mut self, terminator: &str) {
        let width = terminator.chars().count();
        while self.pos < self.chars.len() && !self.looking_at(terminator) {
            self.pos += 1;
        }
        self.pos = (self.pos + width).min(self.chars.len());
    }

    /// Skips a quoted literal ending on the same line; an unterminated quote
    /// is dropped on its own.
    fn skip_string(&mut self, quote: char) {
        let mut i = self.pos + 1;
        while let Some(&c) = self.chars.get(i) {
            match c {
                '\\' => i += 2,
                '\n' => break,
                c if c == quote => {
                    self.pos = i + 1;
                    return;
                }
                _ => i += 1,
            }
        }
        self.pos += 1;
    }

    fn take_while(&mut self, keep: impl Fn(char) -> bool) -> String {
        let start = self.pos;
        while self.peek(0).map_or(false, &keep) {
            self.pos += 1;
        }
        self.chars[start..self.pos].iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_tokenize_code() {
        let tokens = tokenize(b"def add(a, b):\n    return a + b  # sum\n");
        assert_eq!(
            tokens,
            vec!["def", "add", "(", "a", ",", "b", ")", ":", "return", "a", "+", "b"]
        );
    }

    #[test]
    fn test_tokenize_drops_literals_and_comments() {
        let tokens = tokenize(
            b"x = \"hello\" /* block\ncomment */ y = 'c' 42 0xFF\n-- sql comment\n<!-- html -->z",
        );
        assert_eq!(tokens, vec!["x", "=", "y", "=", "z"]);
    }

    #[test]
    fn test_tokenize_shebang() {
        let tokens = tokenize(b"#!/usr/bin/env ruby\nputs 1\n");
        assert_eq!(tokens, vec!["SHEBANG#!ruby", "puts"]);
    }

    #[test]
    fn test_tokenize_unterminated_quote() {
        assert_eq!(tokenize(b"i'm here"), vec!["i", "m", "here"]);
    }

    #[test]
    fn test_tokenize_respects_byte_limit() {
        let mut data = vec![b' '; BYTE_LIMIT];
        data.extend_from_slice(b"hidden");
        assert!(tokenize(&data).is_empty());
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize(b"").is_empty());
    }

    proptest! {
        #[test]
        fn tokens_are_never_empty_or_spaced(
            data in proptest::collection::vec(any::<u8>(), 0..1024)
        ) {
            for token in tokenize(&data) {
                prop_assert!(!token.is_empty());
                prop_assert!(!token.chars().any(char::is_whitespace), "token {:?}", token);
            }
        }

        #[test]
        fn identifiers_survive(words in proptest::collection::vec("[a-z][a-z0-9_]{0,8}", 1..20)) {
            let text = words.join(" ");
            prop_assert_eq!(tokenize(text.as_bytes()), words);
        }
    }
}
