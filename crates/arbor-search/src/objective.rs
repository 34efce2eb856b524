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

//! Objective and pruning contracts consumed by the search engine.
//!
//! The engine treats nodes as opaque; everything it learns about a node goes
//! through an [`Objective`]. Branch-and-bound behavior is layered on top via
//! [`Prune`], whose verdicts form a closed set.

/// Maps search tree nodes to values of a totally ordered set.
///
/// The engine requires only comparison and equality on the value type; it
/// performs no arithmetic. `Display` supplies the default trace rendering.
pub trait Objective {
    /// The node type of the search tree.
    type Node;

    /// The objective value type.
    type Value: Clone + Ord + std::fmt::Display;

    /// Evaluates the objective function on `node`.
    fn objective(&self, node: &Self::Node) -> Self::Value;

    /// Renders an objective value as JSON for trace records.
    ///
    /// Defaults to the textual form of the value, which is sufficient for
    /// number types.
    fn render(&self, value: &Self::Value) -> String {
        value.to_string()
    }
}

/// Verdict of a pruning predicate for a candidate node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PruneVerdict {
    /// No verdict: descend into the candidate's subtree.
    Below,
    /// The candidate's subtree cannot beat the incumbent: skip it.
    Prune,
    /// Neither the candidate's subtree nor the subtree of any later sibling
    /// can beat the incumbent: skip them all and backtrack.
    PruneBacktrack,
}

impl std::fmt::Display for PruneVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PruneVerdict::Below => write!(f, "Below"),
            PruneVerdict::Prune => write!(f, "Prune"),
            PruneVerdict::PruneBacktrack => write!(f, "PruneBacktrack"),
        }
    }
}

/// A pruning predicate over (candidate, incumbent) pairs.
///
/// # Admissibility
///
/// The optimizing search modes assume the predicate is admissible: it must
/// never return [`PruneVerdict::Prune`] or [`PruneVerdict::PruneBacktrack`]
/// for a subtree that contains a node whose objective exceeds the
/// incumbent's. `PruneBacktrack` additionally asserts that the caller
/// enumerates siblings in an order under which no later sibling's subtree can
/// improve on the incumbent either.
pub trait Prune: Objective {
    /// Judges whether the subtree rooted at `candidate` can be discarded
    /// given the current `incumbent`.
    ///
    /// The default judges nothing and always descends.
    fn prune(&self, _candidate: &Self::Node, _incumbent: &Self::Node) -> PruneVerdict {
        PruneVerdict::Below
    }
}
