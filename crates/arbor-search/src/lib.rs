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

//! Arbor-Search: exhaustive depth-first search over implicit trees
//!
//! A generic engine for depth-first exhaustive search over trees that are
//! never materialized: the shape of the tree is dictated entirely by a
//! user-supplied lazy node generator. The engine separates child generation,
//! objective evaluation, pruning, and observation so consumers can plug in
//! problem semantics without touching the traversal itself.
//!
//! Core flow
//! - Implement `generator::Generator` for your search tree (lazy children plus
//!   a residual-size hint).
//! - Implement `objective::Objective` (and `objective::Prune` for
//!   branch-and-bound) on a problem type.
//! - Pick a logger from `logger` (no-op, per-event counts, per-depth
//!   histograms) or implement `logger::SearchLogger` yourself.
//! - Run one of the three modes on `engine::SearchEngine`: `enumerate`,
//!   `maximize`, or `decide`.
//!
//! Design highlights
//! - Iterative traversal over a stack of counting generators; no recursion,
//!   so tree depth is bounded by memory rather than the call stack.
//! - Incumbent strengthening is strict: equal objective values never replace
//!   the incumbent, which keeps event sequences deterministic.
//! - Loggers observe every state change and own the timeout discipline; a
//!   timeout unwinds the search as an error the caller can catch.
//!
//! Module map
//! - `accumulator`: commutative-monoid accumulation for enumeration mode.
//! - `engine`: the search engine and its three entry points.
//! - `event`: the closed set of search events.
//! - `generator`: the lazy generator contract and the counting wrapper.
//! - `logger`: logger contract, timeout error, trace options, and the
//!   concrete loggers.
//! - `objective`: objective, rendering, and pruning contracts.

pub mod accumulator;
pub mod engine;
pub mod event;
pub mod generator;
pub mod logger;
pub mod objective;
