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

//! Criterion benchmarks for the detection strategies.
//!
//! Uses a small generated corpus so the numbers do not depend on a local
//! `.linguist/samples` checkout. Only the strategy call is timed; cache
//! resets happen between calls, outside the measured span.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use glot_bench::{Context, Corpus, Registry, Sample};
use glot_detect::{load_language_candidates, Blob};
use std::time::{Duration, Instant};

fn generated_corpus() -> Corpus {
    let samples = vec![
        Sample::new(
            "samples/Python/app.py",
            "#!/usr/bin/env python3\nimport sys\n\ndef main():\n    print(sys.argv)\n".repeat(20),
        ),
        Sample::new(
            "samples/Shell/build",
            "#!/bin/bash\nset -e\nfor f in *.c; do\n  cc -c \"$f\"\ndone\n".repeat(20),
        ),
        Sample::new(
            "samples/C++/vector.h",
            "#include <vector>\ntemplate <typename T>\nclass Stack { std::vector<T> items; };\n"
                .repeat(20),
        ),
        Sample::new(
            "samples/Perl/tool.pl",
            "use strict;\nmy $x = shift;\nsub run { print \"$x\\n\"; }\n".repeat(20),
        ),
        Sample::new(
            "samples/Ruby/Rakefile",
            "# -*- mode: ruby -*-\ntask :default do\n  puts 'hi'\nend\n".repeat(20),
        ),
    ];
    Corpus::from_samples("samples", samples)
}

fn bench_strategies(c: &mut Criterion) {
    let mut corpus = generated_corpus();
    let languages = load_language_candidates().expect("language catalogue");
    let statistics = corpus.statistics(&languages);
    let context = Context::new(languages, statistics);
    let registry = Registry::standard().expect("standard registry");

    for strategy in registry.iter() {
        let mut group = c.benchmark_group(strategy.label());

        for sample in corpus.samples_mut() {
            group.throughput(Throughput::Bytes(sample.data().len() as u64));
            let id = BenchmarkId::from_parameter(sample.label().to_string());
            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut elapsed = Duration::ZERO;
                    for _ in 0..iters {
                        let start = Instant::now();
                        let languages = strategy.invoke(black_box(&*sample), &context);
                        elapsed += start.elapsed();
                        black_box(languages);
                        sample.reset();
                    }
                    elapsed
                })
            });
        }

        group.finish();
    }
}

fn bench_total(c: &mut Criterion) {
    let mut corpus = generated_corpus();
    let languages = load_language_candidates().expect("language catalogue");
    let statistics = corpus.statistics(&languages);
    let context = Context::new(languages, statistics);
    let registry = Registry::standard().expect("standard registry");

    let mut group = c.benchmark_group("total");
    for strategy in registry.iter() {
        group.bench_function(strategy.label(), |b| {
            b.iter_custom(|iters| {
                let mut elapsed = Duration::ZERO;
                for _ in 0..iters {
                    for sample in corpus.samples_mut() {
                        let start = Instant::now();
                        let languages = strategy.invoke(black_box(&*sample), &context);
                        elapsed += start.elapsed();
                        black_box(languages);
                        sample.reset();
                    }
                }
                elapsed
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_strategies, bench_total);
criterion_main!(benches);
