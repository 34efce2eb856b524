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

//! Solver assembly: root, generator, short-circuit target, engine run.

use crate::instance::PartitionInstance;
use crate::node::{PartitionNode, PartitionNodeGenerator, PartitionProblem};
use arbor_search::engine::SearchEngine;
use arbor_search::logger::{SearchLogger, TimeoutError};
use num_traits::{NumCast, PrimInt, Signed};

/// The best partition found by a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionSolution<T> {
    /// Part index per item, in instance order.
    pub assignment: Vec<u32>,
    /// Final part sums, indexed by part.
    pub sums: Vec<T>,
    /// The largest part sum; the minimized quantity.
    pub max_sum: T,
}

/// Branch-and-bound solver for one partition instance.
#[derive(Debug, Clone, Copy)]
pub struct PartitionSolver<'a, T> {
    instance: &'a PartitionInstance<T>,
}

impl<'a, T> PartitionSolver<'a, T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    pub fn new(instance: &'a PartitionInstance<T>) -> Self {
        Self { instance }
    }

    /// The short-circuit target: the negation of the best-case max sum.
    ///
    /// No partition can have a max sum below `ceil(total / k)`, so a
    /// strengthening that reaches this value is known optimal and ends the
    /// search early.
    pub fn best_case_target(&self) -> T {
        let total = self.instance.total();
        let parts = T::from(self.instance.part_count())
            .expect("part count must be representable in the size type");
        let ceiling = (total + parts - T::one()) / parts;
        -ceiling
    }

    /// Runs the branch-and-bound search to completion or timeout.
    pub fn solve<L>(&self, logger: &mut L) -> Result<PartitionSolution<T>, TimeoutError>
    where
        L: SearchLogger<PartitionNodeGenerator<'a, T>>,
    {
        let root = PartitionNode::root(self.instance);
        let seed = PartitionNodeGenerator::rooted_at(&root);
        let problem = PartitionProblem::new(self.instance);
        let target = self.best_case_target();

        let mut engine = SearchEngine::preallocated(self.instance.num_items() + 1);
        let best = engine.maximize(&root, &seed, &problem, Some(&target), logger)?;

        Ok(PartitionSolution {
            assignment: best.assignment().to_vec(),
            sums: best.sums().to_vec(),
            max_sum: best.max_sum(),
        })
    }
}
