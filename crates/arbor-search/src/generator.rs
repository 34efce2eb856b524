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

//! # Lazy Node Generators
//!
//! A generator is a stateful cursor over the children of one parent node in
//! the search tree, plus a factory for the generators of deeper nodes. The
//! engine never materializes the tree; it only ever holds one generator per
//! level of the current root-to-frontier path.
//!
//! ## Contract
//!
//! - `residual()` returns an upper bound on the number of children the cursor
//!   can still emit. It is zero if and only if the cursor is exhausted, and
//!   it is non-increasing across calls to `advance`.
//! - `advance()` is called only while `residual() > 0`; it returns the next
//!   child and decreases `residual()` by at least one.
//! - `children(node)` returns a fresh generator for `node`'s children. It is
//!   pure with respect to the cursor: it neither observes nor mutates the
//!   cursor state, so it may be called through any live generator.
//!
//! The loose `residual` contract lets implementations trade precision for
//! speed; loggers that record residuals per level document upper bounds.

/// A lazy cursor over the children of a single search tree node.
pub trait Generator: Sized {
    /// The node type of the search tree.
    type Node;

    /// Returns an upper bound on the number of children left to emit.
    ///
    /// # Note
    ///
    /// The bound must be zero exactly when the cursor is exhausted and must
    /// never increase between calls to [`advance`](Generator::advance).
    fn residual(&self) -> usize;

    /// Returns the next child and advances the cursor, or `None` if the
    /// cursor is exhausted.
    fn advance(&mut self) -> Option<Self::Node>;

    /// Returns a fresh generator for the children of `node`.
    ///
    /// Must not depend on the state of `self`'s cursor.
    fn children(&self, node: &Self::Node) -> Self;
}

/// A generator decorator that counts successful cursor advances.
///
/// The wrapper forwards `residual` and `children` verbatim. `children`
/// deliberately returns the *unwrapped* generator: the engine re-wraps a
/// child generator when it pushes it onto the search stack, so every stack
/// level carries its own advance count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountingGenerator<G> {
    inner: G,
    advance_calls: u64,
}

impl<G> CountingGenerator<G>
where
    G: Generator,
{
    /// Wraps `inner`, starting the advance counter at zero.
    #[inline]
    pub fn new(inner: G) -> Self {
        Self {
            inner,
            advance_calls: 0,
        }
    }

    /// Returns the residual-size hint of the wrapped generator.
    #[inline]
    pub fn residual(&self) -> usize {
        self.inner.residual()
    }

    /// Counts the call, then delegates to the wrapped generator.
    ///
    /// The counter increments by exactly one per call, even when the wrapped
    /// generator is already exhausted.
    #[inline]
    pub fn advance(&mut self) -> Option<G::Node> {
        self.advance_calls += 1;
        self.inner.advance()
    }

    /// Returns a fresh, unwrapped generator for the children of `node`.
    #[inline]
    pub fn children(&self, node: &G::Node) -> G {
        self.inner.children(node)
    }

    /// Returns the number of calls made to `advance` so far.
    #[inline]
    pub fn advance_count(&self) -> u64 {
        self.advance_calls
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A generator over a fixed list of integers; children of `n` are
    /// `n - 1` copies of `n - 1`, so trees stay small and predictable.
    #[derive(Debug, Clone)]
    struct CountdownGenerator {
        pending: Vec<i64>,
        cursor: usize,
    }

    impl CountdownGenerator {
        fn over(pending: Vec<i64>) -> Self {
            Self { pending, cursor: 0 }
        }
    }

    impl Generator for CountdownGenerator {
        type Node = i64;

        fn residual(&self) -> usize {
            self.pending.len() - self.cursor
        }

        fn advance(&mut self) -> Option<i64> {
            let next = self.pending.get(self.cursor).copied();
            if next.is_some() {
                self.cursor += 1;
            }
            next
        }

        fn children(&self, node: &i64) -> Self {
            let n = (*node - 1).max(0);
            Self::over(vec![n; n as usize])
        }
    }

    #[test]
    fn test_wrapper_forwards_residual_verbatim() {
        let mut wrapped = CountingGenerator::new(CountdownGenerator::over(vec![3, 2, 1]));
        assert_eq!(wrapped.residual(), 3);
        wrapped.advance();
        assert_eq!(wrapped.residual(), 2);
    }

    #[test]
    fn test_wrapper_counts_each_advance_exactly_once() {
        let mut wrapped = CountingGenerator::new(CountdownGenerator::over(vec![5, 4]));
        assert_eq!(wrapped.advance_count(), 0);
        assert_eq!(wrapped.advance(), Some(5));
        assert_eq!(wrapped.advance(), Some(4));
        assert_eq!(wrapped.advance_count(), 2);
    }

    #[test]
    fn test_wrapper_counts_advances_past_exhaustion() {
        let mut wrapped = CountingGenerator::new(CountdownGenerator::over(vec![1]));
        assert_eq!(wrapped.advance(), Some(1));
        assert_eq!(wrapped.advance(), None);
        assert_eq!(wrapped.advance_count(), 2);
    }

    #[test]
    fn test_children_returns_unwrapped_generator_without_touching_cursor() {
        let wrapped = CountingGenerator::new(CountdownGenerator::over(vec![3, 2]));
        let child_gen = wrapped.children(&3);
        assert_eq!(child_gen.residual(), 2);
        // The cursor and counter of the wrapper are untouched.
        assert_eq!(wrapped.residual(), 2);
        assert_eq!(wrapped.advance_count(), 0);
    }
}
