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

//! Count logger: per-event-kind repeat counters dumped as JSON trace records.

use crate::event::SearchEvent;
use crate::generator::{CountingGenerator, Generator};
use crate::logger::record::{objective_json, stack_path, stack_residuals};
use crate::logger::{NoLogger, SearchLogger, TimeoutError, TraceOptions};
use serde::Serialize;

/// Counters and timestamps maintained by the [`CountLogger`].
///
/// `max_stack_depth` starts at -1 until the first event is recorded; the
/// at-most-once events carry their iteration timestamp or stay absent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct CountSummary {
    max_stack_depth: i64,
    evts: u64,
    expand_evts: u64,
    backtrack_evts: u64,
    prune_backtrack_evts: u64,
    prune_evts: u64,
    strengthen_evts: u64,
    shortcircuit_evts: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    terminate_at: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timeout_at: Option<u64>,
}

impl CountSummary {
    fn new() -> Self {
        Self {
            max_stack_depth: -1,
            evts: 0,
            expand_evts: 0,
            backtrack_evts: 0,
            prune_backtrack_evts: 0,
            prune_evts: 0,
            strengthen_evts: 0,
            shortcircuit_evts: 0,
            terminate_at: None,
            timeout_at: None,
        }
    }
}

/// One emitted trace record: the event context followed by the full summary.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CountRecord<'a> {
    iter: u64,
    event: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    objective: Option<serde_json::Value>,
    stack_depth: usize,
    path: Vec<u64>,
    stack: Vec<usize>,
    #[serde(flatten)]
    summary: &'a CountSummary,
}

/// A logger that counts events per kind and prints JSON trace records to
/// stdout whenever the trace predicate fires.
///
/// Layers over [`NoLogger`] for the timeout discipline and additionally
/// records a final `TIMEOUT` event before the failure propagates.
#[derive(Debug, Clone)]
pub struct CountLogger {
    base: NoLogger,
    trace: TraceOptions,
    summary: CountSummary,
}

impl CountLogger {
    /// Creates a count logger whose trace predicate never fires; only
    /// `TERMINATE` and `TIMEOUT` records are emitted.
    pub fn new() -> Self {
        Self::with_trace(TraceOptions::default())
    }

    /// Creates a count logger with the given trace options.
    pub fn with_trace(trace: TraceOptions) -> Self {
        Self {
            base: NoLogger::new(),
            trace,
            summary: CountSummary::new(),
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

    pub fn expand_evts(&self) -> u64 {
        self.summary.expand_evts
    }

    pub fn backtrack_evts(&self) -> u64 {
        self.summary.backtrack_evts
    }

    pub fn prune_backtrack_evts(&self) -> u64 {
        self.summary.prune_backtrack_evts
    }

    pub fn prune_evts(&self) -> u64 {
        self.summary.prune_evts
    }

    pub fn strengthen_evts(&self) -> u64 {
        self.summary.strengthen_evts
    }

    pub fn shortcircuit_evts(&self) -> u64 {
        self.summary.shortcircuit_evts
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
        serde_json::to_string(&self.summary).expect("serializing a count summary cannot fail")
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
        }
        self.summary.evts += 1;
        match event {
            SearchEvent::Expand => self.summary.expand_evts += 1,
            SearchEvent::Backtrack => self.summary.backtrack_evts += 1,
            SearchEvent::PruneBacktrack => self.summary.prune_backtrack_evts += 1,
            SearchEvent::Prune => self.summary.prune_evts += 1,
            SearchEvent::Strengthen => self.summary.strengthen_evts += 1,
            SearchEvent::ShortCircuit => self.summary.shortcircuit_evts += 1,
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
        let record = CountRecord {
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

impl Default for CountLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl<G> SearchLogger<G> for CountLogger
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

#[cfg(test)]
mod tests {
    use super::*;

    /// A stub whose residual is fixed; sufficient for exercising records.
    #[derive(Debug, Clone)]
    struct StubGenerator {
        residual: usize,
    }

    impl Generator for StubGenerator {
        type Node = u32;

        fn residual(&self) -> usize {
            self.residual
        }

        fn advance(&mut self) -> Option<u32> {
            if self.residual == 0 {
                return None;
            }
            self.residual -= 1;
            Some(0)
        }

        fn children(&self, _node: &u32) -> Self {
            Self { residual: 0 }
        }
    }

    fn stack_of(residuals: &[usize], advances: &[u64]) -> Vec<CountingGenerator<StubGenerator>> {
        residuals
            .iter()
            .zip(advances)
            .map(|(&residual, &calls)| {
                let mut gen = CountingGenerator::new(StubGenerator {
                    residual: residual + calls as usize,
                });
                for _ in 0..calls {
                    gen.advance();
                }
                gen
            })
            .collect()
    }

    #[test]
    fn test_counters_update_per_event_kind() {
        let mut logger = CountLogger::new();
        let stack = stack_of(&[2], &[1]);
        SearchLogger::<StubGenerator>::log(&mut logger, SearchEvent::Expand, 1, &stack);
        SearchLogger::<StubGenerator>::log(&mut logger, SearchEvent::Expand, 2, &stack);
        SearchLogger::<StubGenerator>::log(&mut logger, SearchEvent::Backtrack, 3, &stack);
        SearchLogger::<StubGenerator>::log(&mut logger, SearchEvent::Prune, 4, &stack);
        SearchLogger::<StubGenerator>::log(&mut logger, SearchEvent::PruneBacktrack, 5, &stack);
        SearchLogger::<StubGenerator>::log_strengthen(&mut logger, "7", 6, &stack);

        assert_eq!(logger.evts(), 6);
        assert_eq!(logger.expand_evts(), 2);
        assert_eq!(logger.backtrack_evts(), 1);
        assert_eq!(logger.prune_evts(), 1);
        assert_eq!(logger.prune_backtrack_evts(), 1);
        assert_eq!(logger.strengthen_evts(), 1);
        assert_eq!(logger.shortcircuit_evts(), 0);
        assert_eq!(logger.terminate_at(), None);
    }

    #[test]
    fn test_max_stack_depth_tracks_the_deepest_emission() {
        let mut logger = CountLogger::new();
        assert_eq!(logger.max_stack_depth(), -1);
        let shallow = stack_of(&[1], &[1]);
        let deep = stack_of(&[1, 1, 1], &[1, 1, 1]);
        SearchLogger::<StubGenerator>::log(&mut logger, SearchEvent::Expand, 1, &deep);
        SearchLogger::<StubGenerator>::log(&mut logger, SearchEvent::Backtrack, 2, &shallow);
        assert_eq!(logger.max_stack_depth(), 3);
    }

    #[test]
    fn test_terminate_records_its_iteration() {
        let mut logger = CountLogger::new();
        let stack = stack_of(&[], &[]);
        SearchLogger::<StubGenerator>::log(&mut logger, SearchEvent::Terminate, 9, &stack);
        assert_eq!(logger.terminate_at(), Some(9));
        assert_eq!(logger.evts(), 1);
    }

    #[test]
    fn test_timeout_records_event_before_propagating() {
        let mut logger = CountLogger::new();
        SearchLogger::<StubGenerator>::set_iter_timeout(&mut logger, 0);
        let stack = stack_of(&[2], &[1]);
        let result = SearchLogger::<StubGenerator>::timeout(&mut logger, 1, &stack);
        assert_eq!(result, Err(TimeoutError { iter: 1 }));
        assert_eq!(logger.timeout_at(), Some(1));
    }

    #[test]
    fn test_timeout_passes_while_within_bounds() {
        let mut logger = CountLogger::new();
        SearchLogger::<StubGenerator>::set_iter_timeout(&mut logger, 10);
        let stack = stack_of(&[1], &[1]);
        assert!(SearchLogger::<StubGenerator>::timeout(&mut logger, 9, &stack).is_ok());
        assert_eq!(logger.timeout_at(), None);
        assert_eq!(logger.evts(), 0);
    }

    #[test]
    fn test_record_shape_and_key_order() {
        let mut logger = CountLogger::new();
        let stack = stack_of(&[3, 0], &[1, 2]);
        SearchLogger::<StubGenerator>::log(&mut logger, SearchEvent::Expand, 4, &stack);
        let line = logger.render(SearchEvent::Expand, 4, &stack, None);

        let value: serde_json::Value = serde_json::from_str(&line).expect("record must be JSON");
        assert_eq!(value["iter"], 4);
        assert_eq!(value["event"], "EXPAND");
        assert_eq!(value["stackDepth"], 2);
        assert_eq!(value["path"], serde_json::json!([1, 2]));
        assert_eq!(value["stack"], serde_json::json!([3, 0]));
        assert_eq!(value["maxStackDepth"], 2);
        assert_eq!(value["expandEvts"], 1);
        assert!(value.get("objective").is_none());
        assert!(value.get("terminateAt").is_none());

        // Key order matches the reference record layout.
        let iter_pos = line.find("\"iter\"").unwrap();
        let event_pos = line.find("\"event\"").unwrap();
        let depth_pos = line.find("\"stackDepth\"").unwrap();
        let path_pos = line.find("\"path\"").unwrap();
        let max_pos = line.find("\"maxStackDepth\"").unwrap();
        assert!(iter_pos < event_pos && event_pos < depth_pos);
        assert!(depth_pos < path_pos && path_pos < max_pos);
    }

    #[test]
    fn test_strengthen_record_carries_numeric_objective() {
        let mut logger = CountLogger::new();
        let stack = stack_of(&[1], &[1]);
        SearchLogger::<StubGenerator>::log_strengthen(&mut logger, "-8", 3, &stack);
        let line = logger.render(SearchEvent::Strengthen, 3, &stack, Some("-8"));
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["objective"], serde_json::json!(-8));
    }

    #[test]
    fn test_summary_json_omits_absent_timestamps() {
        let logger = CountLogger::new();
        let summary = logger.summary_json();
        assert!(summary.contains("\"maxStackDepth\":-1"));
        assert!(!summary.contains("terminateAt"));
        assert!(!summary.contains("timeoutAt"));
    }
}
