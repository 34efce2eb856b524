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

//! Arbor-Partition: multiway number partitioning on the Arbor search engine
//!
//! Splits a set of positive numbers into `k` parts so that the largest part
//! sum is minimized. The solver is the complete greedy algorithm expressed as
//! branch-and-bound: items are assigned in the given (non-increasing) order,
//! children are enumerated least-loaded part first, and a dominance check
//! bulk-prunes whole sibling ranges once a partial partition cannot beat the
//! incumbent.
//!
//! Module map
//! - `instance`: the validated problem instance and its text-file loader.
//! - `node`: search tree node, lazy child generator, and the problem
//!   definition (objective + pruning) consumed by the engine.
//! - `solver`: assembly of root, generator, target value, and engine run.

pub mod instance;
pub mod node;
pub mod solver;
