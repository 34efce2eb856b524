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

//! The closed set of events a search can emit.
//!
//! Within a single search the engine guarantees:
//! - an initial `Expand` for the root precedes every other event,
//! - `Terminate` and `Timeout` are mutually exclusive and final,
//! - `ShortCircuit`, if present, occurs exactly once and immediately
//!   precedes `Terminate`,
//! - a `Strengthen` for a node precedes that node's `Expand`.

/// An event recorded by search loggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchEvent {
    /// Expand the search tree: a node generator is pushed onto the stack.
    Expand,
    /// Contract the search tree: the top node generator is popped.
    Backtrack,
    /// Prune the subtree rooted at the current node.
    Prune,
    /// Prune the current node and all of its later siblings, then backtrack.
    PruneBacktrack,
    /// Strengthen the incumbent with a strictly better node.
    Strengthen,
    /// Short-circuit the search on reaching the target objective value.
    ShortCircuit,
    /// Terminate the search normally.
    Terminate,
    /// Abort the search because a timeout fired.
    Timeout,
}

impl SearchEvent {
    /// Returns the wire name of the event as it appears in trace records.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            SearchEvent::Expand => "EXPAND",
            SearchEvent::Backtrack => "BACKTRACK",
            SearchEvent::Prune => "PRUNE",
            SearchEvent::PruneBacktrack => "PRUNEBACKTRACK",
            SearchEvent::Strengthen => "STRENGTHEN",
            SearchEvent::ShortCircuit => "SHORTCIRCUIT",
            SearchEvent::Terminate => "TERMINATE",
            SearchEvent::Timeout => "TIMEOUT",
        }
    }
}

impl std::fmt::Display for SearchEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_are_uppercase_and_unique() {
        let all = [
            SearchEvent::Expand,
            SearchEvent::Backtrack,
            SearchEvent::Prune,
            SearchEvent::PruneBacktrack,
            SearchEvent::Strengthen,
            SearchEvent::ShortCircuit,
            SearchEvent::Terminate,
            SearchEvent::Timeout,
        ];
        for event in all {
            assert_eq!(event.name(), event.name().to_uppercase());
        }
        let mut names: Vec<&str> = all.iter().map(|e| e.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), all.len(), "wire names must be distinct");
    }

    #[test]
    fn test_display_matches_wire_name() {
        assert_eq!(SearchEvent::PruneBacktrack.to_string(), "PRUNEBACKTRACK");
        assert_eq!(SearchEvent::ShortCircuit.to_string(), "SHORTCIRCUIT");
    }
}
