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

//! Tests for the `glot-bench` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{tempdir, TempDir};

fn glot_cmd() -> Command {
    Command::cargo_bin("glot-bench").expect("Failed to find glot-bench binary")
}

/// Working directory containing a small `.linguist/samples` corpus.
fn workdir() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");
    let samples = dir.path().join(".linguist").join("samples").join("Python");
    fs::create_dir_all(&samples).expect("Failed to create corpus");
    fs::write(samples.join("hello.py"), "print('hello')\n").expect("Failed to write sample");
    dir
}

#[test]
fn runs_with_explicit_iterations() {
    let dir = workdir();
    glot_cmd()
        .current_dir(dir.path())
        .arg("3")
        .assert()
        .success()
        .stdout(predicate::str::contains("MODE: per-sample (3 iterations)"))
        .stdout(predicate::str::contains("Classify()_TOTAL 3"))
        .stdout(predicate::str::contains("GetLanguagesByContent()_TOTAL 3"))
        .stdout(predicate::str::contains("hello.py 3"))
        .stdout(predicate::str::contains("Reports: 12, failed: 0"));
}

#[test]
fn non_numeric_iterations_default_to_one() {
    let dir = workdir();
    glot_cmd()
        .current_dir(dir.path())
        .arg("abc")
        .assert()
        .success()
        .stdout(predicate::str::contains("GetLanguagesByShebang()_TOTAL 1"));
}

#[test]
fn no_argument_defaults_to_one() {
    let dir = workdir();
    glot_cmd()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("GetLanguagesByModeline()_TOTAL 1"));
}

#[test]
fn missing_corpus_fails_without_reports() {
    let dir = tempdir().expect("Failed to create temp dir");
    glot_cmd()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: Filesystem error"));
}

#[test]
fn logs_go_to_stderr() {
    let dir = workdir();
    glot_cmd()
        .current_dir(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("corpus loaded"))
        .stdout(predicate::str::contains("corpus loaded").not());
}
