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

//! Histogram logger: per-event-kind counts bucketed by stack depth.

use crate::event::SearchEvent;
use crate::generator::{CountingGenerator, Generator};
use crate::logger::record::{objective_json, stack_path, stack_residuals};
use crate::logger::{NoLogger, SearchLogger, TimeoutError, TraceOptions};
use serde::Serialize;

/// Histograms and timestamps maintained by the [`HistLogger`].
///
/// Every histogram is indexed by stack depth and grown lazily to
/// `max_stack_depth + 1` buckets, so all histograms always share one length.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct HistSummary {
    max_stack_depth: i64,
    evts: u64,
    expand_hist: Vec<u64>,
    backtrack_hist: Vec<u64>,
    prune_backtrack_hist: Vec<u64>,
    prune_hist: Vec<u64>,
    strengthen_hist: Vec<u64>,
    shortcircuit_hist: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    terminate_at: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timeout_at: Option<u64>,
}

impl HistSummary {
    fn new() -> Self {
        Self {
            max_stack_depth: -1,
            evts: 0,
            expand_hist: Vec::new(),
            backtrack_hist: Vec::new(),
            prune_backtrack_hist: Vec::new(),
            prune_hist: Vec::new(),
            strengthen_hist: Vec::new(),
            shortcircuit_hist: Vec::new(),
            terminate_at: None,
            timeout_at: None,
        }
    }

    /// Grows every histogram to cover depths `0..=depth`.
    fn grow_to(&mut self, depth: usize) {
        let buckets = depth + 1;
        self.expand_hist.resize(buckets, 0);
        self.backtrack_hist.resize(buckets, 0);
        self.prune_backtrack_hist.resize(buckets, 0);
        self.prune_hist.resize(buckets, 0);
        self.strengthen_hist.resize(buckets, 0);
        self.shortcircuit_hist.resize(buckets, 0);
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HistRecord<'a> {
    iter: u64,
    event: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    objective: Option<serde_json::Value>,
    stack_depth: usize,
    path: Vec<u64>,
    stack: Vec<usize>,
    #[serde(flatten)]
    summary: &'a HistSummary,
}

/// A logger with the same contract as [`crate::logger::CountLogger`], except
/// that each repeat counter becomes a vector indexed by stack depth.
///
/// Layers over [`NoLogger`] for the timeout discipline and additionally
/// records a final `TIMEOUT` event before the failure propagates.
#[derive(Debug, Clone)]
pub struct HistLogger {
    base: NoLogger,
    trace: TraceOptions,
    summary: HistSummary,
}

impl HistLogger {
    /// Creates a histogram logger whose trace predicate never fires; only
    /// `TERMINATE` and `TIMEOUT` records are emitted.
    pub fn new() -> Self {
        Self::with_trace(TraceOptions::default())
    }

    /// Creates a histogram logger with the given trace options.
    pub fn with_trace(trace: TraceOptions) -> Self {
        Self {
            base: NoLogger::new(),
            trace,
            summary: HistSummary::new(),
        }
    }

    /// Maximum observed stack depth; -1 until the first event.
    pub fn max_stack_depth(&self) -> i64 {
        self.summary.max_stack_depth
    }

    /// Total number of recorded events.
    pub fn evts(&self) -> u64 {
        self.summary.evts
    }

    pub fn expand_hist(&self) -> &[u64] {
        &self.summary.expand_hist
    }

    pub fn backtrack_hist(&self) -> &[u64] {
        &self.summary.backtrack_hist
    }

    pub fn prune_backtrack_hist(&self) -> &[u64] {
        &self.summary.prune_backtrack_hist
    }

    pub fn prune_hist(&self) -> &[u64] {
        &self.summary.prune_hist
    }

    pub fn strengthen_hist(&self) -> &[u64] {
        &self.summary.strengthen_hist
    }

    pub fn shortcircuit_hist(&self) -> &[u64] {
        &self.summary.shortcircuit_hist
    }

    /// Iteration of the `TERMINATE` event, if the search completed.
    pub fn terminate_at(&self) -> Option<u64> {
        self.summary.terminate_at
    }

    /// Iteration of the `TIMEOUT` event, if the search timed out.
    pub fn timeout_at(&self) -> Option<u64> {
        self.summary.timeout_at
    }

    /// Returns the current summary as a JSON object.
    pub fn summary_json(&self) -> String {
        serde_json::to_string(&self.summary).expect("serializing a histogram summary cannot fail")
    }

    fn record<G>(
        &mut self,
        event: SearchEvent,
        iter: u64,
        stack: &[CountingGenerator<G>],
        objective: Option<&str>,
    ) where
        G: Generator,
    {
        let stack_depth = stack.len();
        if stack_depth as i64 > self.summary.max_stack_depth {
            self.summary.max_stack_depth = stack_depth as i64;
            self.summary.grow_to(stack_depth);
        }
        self.summary.evts += 1;
        match event {
            SearchEvent::Expand => self.summary.expand_hist[stack_depth] += 1,
            SearchEvent::Backtrack => self.summary.backtrack_hist[stack_depth] += 1,
            SearchEvent::PruneBacktrack => self.summary.prune_backtrack_hist[stack_depth] += 1,
            SearchEvent::Prune => self.summary.prune_hist[stack_depth] += 1,
            SearchEvent::Strengthen => self.summary.strengthen_hist[stack_depth] += 1,
            SearchEvent::ShortCircuit => self.summary.shortcircuit_hist[stack_depth] += 1,
            SearchEvent::Terminate => self.summary.terminate_at = Some(iter),
            SearchEvent::Timeout => self.summary.timeout_at = Some(iter),
        }
        if self.trace.fires(event, self.summary.evts, stack_depth)
            || event == SearchEvent::Terminate
            || event == SearchEvent::Timeout
        {
            println!("{}", self.render(event, iter, stack, objective));
        }
    }

    fn render<G>(
        &self,
        event: SearchEvent,
        iter: u64,
        stack: &[CountingGenerator<G>],
        objective: Option<&str>,
    ) -> String
    where
        G: Generator,
    {
        let record = HistRecord {
            iter,
            event: event.name(),
            objective: objective.map(objective_json),
            stack_depth: stack.len(),
            path: stack_path(stack),
            stack: stack_residuals(stack),
            summary: &self.summary,
        };
        serde_json::to_string(&record).expect("serializing a trace record cannot fail")
    }
}

impl Default for HistLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl<G> SearchLogger<G> for HistLogger
where
    G: Generator,
{
    fn log(&mut self, event: SearchEvent, iter: u64, stack: &[CountingGenerator<G>]) {
        self.record(event, iter, stack, None);
    }

    fn log_strengthen(&mut self, objective_json: &str, iter: u64, stack: &[CountingGenerator<G>]) {
        self.record(SearchEvent::Strengthen, iter, stack, Some(objective_json));
    }

    fn set_iter_timeout(&mut self, bound: i64) {
        self.base.arm_iter_bound(bound);
    }

    fn set_wall_timeout(&mut self, millis: i64) {
        self.base.arm_wall_deadline(millis);
    }

    fn timeout(
        &mut self,
        iter: u64,
        stack: &[CountingGenerator<G>],
    ) -> Result<(), TimeoutError> {
        if let Err(expired) = self.base.check(iter) {
            self.record(SearchEvent::Timeout, iter, stack, None);
            return Err(expired);
        }
        Ok(())
    }
}
