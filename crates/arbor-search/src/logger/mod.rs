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

//! # Search Loggers
//!
//! Pluggable observers for search lifecycle events. Loggers collect per-event
//! statistics, emit structured trace records, and own the timeout discipline
//! that bounds a search in iterations or wall-clock time.
//!
//! ## Submodules
//!
//! - `no_op`: timeout discipline without any recording; the base the concrete
//!   loggers build on.
//! - `count`: per-event-kind repeat counters and at-most-once timestamps.
//! - `hist`: per-event-kind histograms indexed by stack depth.
//! - `options`: the trace predicate composed from four optional criteria,
//!   plus the command-line shims that produce it.
//!
//! ## Timeout discipline
//!
//! The engine polls [`SearchLogger::timeout`] once per iteration, before it
//! advances the top generator. A logger signals expiry by returning
//! [`TimeoutError`], which unwinds the search; the concrete loggers record a
//! final `TIMEOUT` event before the failure surfaces, so the event stream
//! always ends with exactly one `TERMINATE` or `TIMEOUT`.

pub mod count;
pub mod hist;
pub mod no_op;
pub mod options;

mod record;

pub use count::CountLogger;
pub use hist::HistLogger;
pub use no_op::NoLogger;
pub use options::TraceOptions;

use crate::event::SearchEvent;
use crate::generator::{CountingGenerator, Generator};

/// The failure raised when a search exceeds its iteration bound or its
/// wall-clock deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutError {
    /// The iteration at which the timeout was detected.
    pub iter: u64,
}

impl std::fmt::Display for TimeoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "search timed out at iteration {}", self.iter)
    }
}

impl std::error::Error for TimeoutError {}

/// Observer and timeout authority for a single search.
///
/// The engine passes the current generator stack (the state *before* the
/// event takes effect) to every hook. Reading the stack depth is O(1);
/// loggers only walk the stack when they actually emit a trace record, so the
/// hooks stay cheap on the hot path.
pub trait SearchLogger<G>
where
    G: Generator,
{
    /// Records an event. `iter` counts the engine steps performed since the
    /// start of the search.
    fn log(&mut self, event: SearchEvent, iter: u64, stack: &[CountingGenerator<G>]);

    /// Records a `STRENGTHEN` event carrying the JSON rendering of the new
    /// incumbent objective value.
    fn log_strengthen(&mut self, objective_json: &str, iter: u64, stack: &[CountingGenerator<G>]);

    /// Arms an iteration bound. A negative `bound` is ignored (no timeout).
    fn set_iter_timeout(&mut self, bound: i64);

    /// Arms a wall-clock deadline in milliseconds. A negative `millis` is
    /// ignored (no deadline).
    fn set_wall_timeout(&mut self, millis: i64);

    /// Checks for timeout; fails with [`TimeoutError`] once the iteration
    /// bound is reached or the wall-clock deadline has fired.
    fn timeout(
        &mut self,
        iter: u64,
        stack: &[CountingGenerator<G>],
    ) -> Result<(), TimeoutError>;
}
