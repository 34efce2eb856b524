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

//! Trace options and their command-line shims.
//!
//! A trace predicate decides, per event, whether a concrete logger emits a
//! structured record in addition to updating its counters. The framework
//! composes four optional criteria by disjunction; `TERMINATE` and `TIMEOUT`
//! always emit regardless of the predicate.
//!
//! The parsing shims accept exactly the option tokens of the reference
//! driver (`-strengthen`, `-evts=N`, `-stackdepth=N`, `-maxstackdepth=N`,
//! `-timeout=N`, `-timeoutMillis=N`, `-countlogger`, `-histlogger`).
//! Unrecognized arguments are silently ignored and malformed or out-of-range
//! numerics leave an option disabled, so the shims never fail.

use crate::event::SearchEvent;

/// The four optional trace criteria, composed into one pure predicate.
///
/// Numeric criteria use `-1` as the disabled sentinel, mirroring the value
/// the parsing shims return for an absent option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceOptions {
    /// Emit on every `STRENGTHEN` event.
    pub strengthen: bool,
    /// Emit whenever the total event count is a multiple of this interval;
    /// disabled unless positive.
    pub events_interval: i64,
    /// Emit whenever the stack depth equals this value; disabled if negative.
    pub stack_depth: i64,
    /// Emit whenever the stack depth is at most this value; disabled if
    /// negative.
    pub max_stack_depth: i64,
}

impl Default for TraceOptions {
    /// All criteria disabled: the predicate never fires.
    fn default() -> Self {
        Self {
            strengthen: false,
            events_interval: -1,
            stack_depth: -1,
            max_stack_depth: -1,
        }
    }
}

impl TraceOptions {
    /// Builds trace options from command-line arguments.
    pub fn from_args(args: &[String]) -> Self {
        Self {
            strengthen: parse_flag(args, "-strengthen"),
            events_interval: parse_numeric(args, "-evts=", 1),
            stack_depth: parse_numeric(args, "-stackdepth=", 0),
            max_stack_depth: parse_numeric(args, "-maxstackdepth=", 0),
        }
    }

    /// The trace predicate: true if any enabled criterion matches.
    ///
    /// `events_so_far` is the total event count including the event being
    /// logged; `stack_depth` is the generator stack depth at emission time.
    pub fn fires(&self, event: SearchEvent, events_so_far: u64, stack_depth: usize) -> bool {
        (self.strengthen && event == SearchEvent::Strengthen)
            || (self.events_interval > 0 && events_so_far % self.events_interval as u64 == 0)
            || (self.stack_depth >= 0 && stack_depth == self.stack_depth as usize)
            || (self.max_stack_depth >= 0 && stack_depth <= self.max_stack_depth as usize)
    }
}

/// Returns a non-negative N if `-timeout=N` was found; -1 otherwise.
pub fn parse_iter_timeout(args: &[String]) -> i64 {
    parse_numeric(args, "-timeout=", 0)
}

/// Returns a non-negative N if `-timeoutMillis=N` was found; -1 otherwise.
pub fn parse_wall_timeout(args: &[String]) -> i64 {
    parse_numeric(args, "-timeoutMillis=", 0)
}

/// Returns true iff `-countlogger` was found.
pub fn parse_count_logger(args: &[String]) -> bool {
    parse_flag(args, "-countlogger")
}

/// Returns true iff `-histlogger` was found.
pub fn parse_hist_logger(args: &[String]) -> bool {
    parse_flag(args, "-histlogger")
}

fn parse_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|arg| arg == flag)
}

/// Returns the first `prefix`N argument with N >= `min`; -1 otherwise.
fn parse_numeric(args: &[String], prefix: &str, min: i64) -> i64 {
    args.iter()
        .find_map(|arg| {
            arg.strip_prefix(prefix)?
                .parse::<i64>()
                .ok()
                .filter(|n| *n >= min)
        })
        .unwrap_or(-1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| (*t).to_owned()).collect()
    }

    #[test]
    fn test_default_predicate_never_fires() {
        let options = TraceOptions::default();
        assert!(!options.fires(SearchEvent::Expand, 1, 0));
        assert!(!options.fires(SearchEvent::Strengthen, 100, 5));
    }

    #[test]
    fn test_strengthen_criterion_matches_only_strengthen_events() {
        let options = TraceOptions {
            strengthen: true,
            ..TraceOptions::default()
        };
        assert!(options.fires(SearchEvent::Strengthen, 1, 3));
        assert!(!options.fires(SearchEvent::Expand, 1, 3));
    }

    #[test]
    fn test_events_interval_fires_on_multiples() {
        let options = TraceOptions {
            events_interval: 10,
            ..TraceOptions::default()
        };
        assert!(options.fires(SearchEvent::Expand, 10, 0));
        assert!(options.fires(SearchEvent::Backtrack, 20, 0));
        assert!(!options.fires(SearchEvent::Expand, 15, 0));
    }

    #[test]
    fn test_exact_stack_depth_criterion() {
        let options = TraceOptions {
            stack_depth: 2,
            ..TraceOptions::default()
        };
        assert!(options.fires(SearchEvent::Expand, 1, 2));
        assert!(!options.fires(SearchEvent::Expand, 1, 3));
        // Depth zero is a legal criterion value.
        let at_root = TraceOptions {
            stack_depth: 0,
            ..TraceOptions::default()
        };
        assert!(at_root.fires(SearchEvent::Terminate, 9, 0));
    }

    #[test]
    fn test_max_stack_depth_criterion_is_inclusive() {
        let options = TraceOptions {
            max_stack_depth: 2,
            ..TraceOptions::default()
        };
        assert!(options.fires(SearchEvent::Expand, 1, 0));
        assert!(options.fires(SearchEvent::Expand, 1, 2));
        assert!(!options.fires(SearchEvent::Expand, 1, 3));
    }

    #[test]
    fn test_criteria_compose_by_disjunction() {
        let options = TraceOptions {
            strengthen: true,
            events_interval: 100,
            ..TraceOptions::default()
        };
        assert!(options.fires(SearchEvent::Strengthen, 7, 4));
        assert!(options.fires(SearchEvent::Prune, 200, 4));
        assert!(!options.fires(SearchEvent::Prune, 7, 4));
    }

    #[test]
    fn test_from_args_reads_all_four_options() {
        let options = TraceOptions::from_args(&args(&[
            "problem.txt",
            "-strengthen",
            "-evts=50",
            "-stackdepth=3",
            "-maxstackdepth=7",
        ]));
        assert_eq!(
            options,
            TraceOptions {
                strengthen: true,
                events_interval: 50,
                stack_depth: 3,
                max_stack_depth: 7,
            }
        );
    }

    #[test]
    fn test_from_args_ignores_unrecognized_and_malformed_tokens() {
        let options = TraceOptions::from_args(&args(&[
            "-frobnicate",
            "-evts=zero",
            "-evts=0",
            "-stackdepth=-4",
        ]));
        assert_eq!(options, TraceOptions::default());
    }

    #[test]
    fn test_timeout_shims() {
        let tokens = args(&["problem.txt", "-timeout=500", "-timeoutMillis=2000"]);
        assert_eq!(parse_iter_timeout(&tokens), 500);
        assert_eq!(parse_wall_timeout(&tokens), 2000);
        assert_eq!(parse_iter_timeout(&args(&["problem.txt"])), -1);
        assert_eq!(parse_iter_timeout(&args(&["-timeout=-3"])), -1);
    }

    #[test]
    fn test_timeout_zero_is_accepted() {
        assert_eq!(parse_iter_timeout(&args(&["-timeout=0"])), 0);
        assert_eq!(parse_wall_timeout(&args(&["-timeoutMillis=0"])), 0);
    }

    #[test]
    fn test_logger_selection_flags() {
        let tokens = args(&["problem.txt", "-countlogger"]);
        assert!(parse_count_logger(&tokens));
        assert!(!parse_hist_logger(&tokens));
    }
}
