// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use arbor_search::accumulator::Accumulate;
use arbor_search::engine::SearchEngine;
use arbor_search::generator::Generator;
use arbor_search::logger::NoLogger;
use arbor_search::objective::{Objective, Prune};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

/// A complete tree of uniform branching and bounded depth, generated on the
/// fly. Values are assigned so that deeper and later children score higher,
/// forcing the maximizer to strengthen repeatedly.
#[derive(Clone, Copy)]
struct UniformNode {
    depth: u32,
    value: i64,
}

struct UniformGenerator {
    parent: UniformNode,
    emitted: usize,
    branching: usize,
    max_depth: u32,
}

impl UniformGenerator {
    fn shape(branching: usize, max_depth: u32) -> Self {
        Self {
            parent: UniformNode { depth: 0, value: 0 },
            emitted: branching,
            branching,
            max_depth,
        }
    }
}

impl Generator for UniformGenerator {
    type Node = UniformNode;

    fn residual(&self) -> usize {
        self.branching - self.emitted
    }

    fn advance(&mut self) -> Option<UniformNode> {
        if self.emitted == self.branching {
            return None;
        }
        let child = UniformNode {
            depth: self.parent.depth + 1,
            value: (self.parent.depth as i64) * 31 + self.emitted as i64 + 1,
        };
        self.emitted += 1;
        Some(child)
    }

    fn children(&self, node: &UniformNode) -> Self {
        Self {
            parent: *node,
            emitted: if node.depth >= self.max_depth {
                self.branching
            } else {
                0
            },
            branching: self.branching,
            max_depth: self.max_depth,
        }
    }
}

struct NodeValue;

impl Objective for NodeValue {
    type Node = UniformNode;
    type Value = i64;

    fn objective(&self, node: &UniformNode) -> i64 {
        node.value
    }
}

impl Prune for NodeValue {}

#[derive(Default)]
struct Sum {
    total: i64,
}

impl Accumulate<i64> for Sum {
    fn add(&mut self, value: i64) {
        self.total += value;
    }

    fn value(&self) -> i64 {
        self.total
    }
}

fn node_count(branching: usize, depth: u32) -> u64 {
    let mut total = 0u64;
    let mut level = 1u64;
    for _ in 0..depth {
        level *= branching as u64;
        total += level;
    }
    total
}

fn bench_enumerate(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate_uniform_tree");
    for (branching, depth) in [(4usize, 6u32), (8, 5), (16, 4)] {
        group.throughput(Throughput::Elements(node_count(branching, depth)));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("b{branching}-d{depth}")),
            &(branching, depth),
            |b, &(branching, depth)| {
                let root = UniformNode { depth: 0, value: 0 };
                let seed = UniformGenerator::shape(branching, depth);
                let mut engine = SearchEngine::preallocated(depth as usize + 1);
                b.iter(|| {
                    let mut sum = Sum::default();
                    let total = engine
                        .enumerate(
                            black_box(&root),
                            &seed,
                            &NodeValue,
                            &mut sum,
                            &mut NoLogger::new(),
                        )
                        .expect("no timeout configured");
                    black_box(total)
                });
            },
        );
    }
    group.finish();
}

fn bench_maximize(c: &mut Criterion) {
    let mut group = c.benchmark_group("maximize_uniform_tree");
    for (branching, depth) in [(4usize, 6u32), (8, 5)] {
        group.throughput(Throughput::Elements(node_count(branching, depth)));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("b{branching}-d{depth}")),
            &(branching, depth),
            |b, &(branching, depth)| {
                let root = UniformNode {
                    depth: 0,
                    value: i64::MIN / 2,
                };
                let seed = UniformGenerator::shape(branching, depth);
                let mut engine = SearchEngine::preallocated(depth as usize + 1);
                b.iter(|| {
                    let best = engine
                        .maximize(
                            black_box(&root),
                            &seed,
                            &NodeValue,
                            None,
                            &mut NoLogger::new(),
                        )
                        .expect("no timeout configured");
                    black_box(best.value)
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_enumerate, bench_maximize);
criterion_main!(benches);
