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

//! Search tree node, lazy child generator, and problem definition.
//!
//! A node at depth `d` is a partition of the `d` largest items. Its children
//! assign item `d` to each of the `k` parts, enumerated least-loaded part
//! first; combined with the non-increasing item order this makes the first
//! leaf reached exactly the greedy solution, and it makes sibling max sums
//! non-decreasing, which licenses the bulk pruning verdict.

use crate::instance::PartitionInstance;
use arbor_search::generator::Generator;
use arbor_search::objective::{Objective, Prune, PruneVerdict};
use num_traits::{PrimInt, Signed};
use smallvec::SmallVec;

/// Inline capacity for per-part bookkeeping; partitions rarely use more
/// than eight parts.
type PartVec<T> = SmallVec<[T; 8]>;

/// An immutable node of the partition search tree.
///
/// Invariants:
/// - `assignment.len()` is the node's depth; `assignment[i] < k`.
/// - `sums[p]` is the total size of the items assigned to part `p`.
/// - `remaining` is the total size of the still unassigned items.
/// - `order` is a permutation of the part indices sorted by descending sum,
///   so `order[k - 1]` is a least-loaded part.
/// - `max_sum == sums[order[0]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionNode<'a, T> {
    instance: &'a PartitionInstance<T>,
    assignment: Vec<u32>,
    sums: PartVec<T>,
    remaining: T,
    order: PartVec<u32>,
    max_sum: T,
}

impl<'a, T> PartitionNode<'a, T>
where
    T: PrimInt + Signed,
{
    /// The root node: nothing assigned, all sums zero, identity part order.
    pub fn root(instance: &'a PartitionInstance<T>) -> Self {
        let parts = instance.part_count() as usize;
        Self {
            instance,
            assignment: Vec::new(),
            sums: std::iter::repeat(T::zero()).take(parts).collect(),
            remaining: instance.total(),
            order: (0..instance.part_count()).collect(),
            max_sum: T::zero(),
        }
    }

    /// The part index chosen for each already assigned item.
    #[inline]
    pub fn assignment(&self) -> &[u32] {
        &self.assignment
    }

    /// Current part sums, indexed by part.
    #[inline]
    pub fn sums(&self) -> &[T] {
        &self.sums
    }

    /// The largest part sum of this partial partition.
    #[inline]
    pub fn max_sum(&self) -> T {
        self.max_sum
    }

    /// Total size of the items not yet assigned.
    #[inline]
    pub fn remaining(&self) -> T {
        self.remaining
    }

    /// True once every item has been assigned.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.assignment.len() == self.instance.num_items()
    }

    /// The instance this node belongs to.
    #[inline]
    pub fn instance(&self) -> &'a PartitionInstance<T> {
        self.instance
    }
}

/// Lazy generator of the children of one partition node.
///
/// Child `i` (counting from the last emitted) assigns the next item to part
/// `order[branches_left]`, so iteration runs from the least-loaded part
/// upwards, exactly like the greedy algorithm's first choice.
#[derive(Debug, Clone)]
pub struct PartitionNodeGenerator<'a, T> {
    parent: PartitionNode<'a, T>,
    level: usize,
    branches_left: usize,
}

impl<'a, T> PartitionNodeGenerator<'a, T>
where
    T: PrimInt + Signed,
{
    /// A generator for the children of `parent`.
    pub fn for_parent(parent: PartitionNode<'a, T>) -> Self {
        let level = parent.assignment.len();
        let branches_left = if level == parent.instance.num_items() {
            0
        } else {
            parent.instance.part_count() as usize
        };
        Self {
            parent,
            level,
            branches_left,
        }
    }

    /// The root generator handed to the engine.
    pub fn rooted_at(root: &PartitionNode<'a, T>) -> Self {
        Self::for_parent(root.clone())
    }
}

impl<'a, T> Generator for PartitionNodeGenerator<'a, T>
where
    T: PrimInt + Signed,
{
    type Node = PartitionNode<'a, T>;

    fn residual(&self) -> usize {
        self.branches_left
    }

    fn advance(&mut self) -> Option<Self::Node> {
        if self.branches_left == 0 {
            return None;
        }
        self.branches_left -= 1;

        // Assign the level-th item to the part ranked `branches_left` from
        // the top, i.e. least-loaded first as the countdown proceeds.
        let part = self.parent.order[self.branches_left] as usize;
        let size = self.parent.instance.size(self.level);

        let mut assignment = Vec::with_capacity(self.level + 1);
        assignment.extend_from_slice(&self.parent.assignment);
        assignment.push(part as u32);

        let mut sums = self.parent.sums.clone();
        sums[part] = sums[part] + size;
        let remaining = self.parent.remaining - size;

        let mut order = self.parent.order.clone();
        order.sort_by(|&a, &b| sums[b as usize].cmp(&sums[a as usize]));
        let max_sum = sums[order[0] as usize];

        Some(PartitionNode {
            instance: self.parent.instance,
            assignment,
            sums,
            remaining,
            order,
            max_sum,
        })
    }

    fn children(&self, node: &Self::Node) -> Self {
        Self::for_parent(node.clone())
    }
}

/// The problem definition consumed by the engine: objective and pruning.
#[derive(Debug, Clone, Copy)]
pub struct PartitionProblem<'a, T> {
    instance: &'a PartitionInstance<T>,
}

impl<'a, T> PartitionProblem<'a, T> {
    pub fn new(instance: &'a PartitionInstance<T>) -> Self {
        Self { instance }
    }
}

impl<'a, T> Objective for PartitionProblem<'a, T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    type Node = PartitionNode<'a, T>;
    type Value = T;

    /// The negated max sum, so that maximizing the objective minimizes the
    /// largest part. Incomplete partitions score the smallest possible value
    /// and therefore never become the incumbent.
    fn objective(&self, node: &Self::Node) -> T {
        if node.assignment.len() < self.instance.num_items() {
            return T::min_value();
        }
        -node.max_sum
    }
}

impl<'a, T> Prune for PartitionProblem<'a, T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    /// Dominance check: once the incumbent is a complete partition, any
    /// candidate whose max sum already matches or exceeds it can never
    /// improve. Because siblings are enumerated in order of non-decreasing
    /// max sum, the verdict discards the whole remaining sibling range.
    fn prune(&self, candidate: &Self::Node, incumbent: &Self::Node) -> PruneVerdict {
        if incumbent.is_complete() && candidate.max_sum >= incumbent.max_sum {
            return PruneVerdict::PruneBacktrack;
        }
        PruneVerdict::Below
    }
}
