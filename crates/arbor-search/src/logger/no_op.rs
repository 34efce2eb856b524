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

use crate::event::SearchEvent;
use crate::generator::{CountingGenerator, Generator};
use crate::logger::{SearchLogger, TimeoutError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// A logger that records nothing and only implements the timeout discipline.
///
/// Holds an iteration bound (negative means disabled) and a stop flag set by
/// a detached timer thread once a wall-clock deadline is armed. The flag is
/// written once and polled once per engine iteration, so a single relaxed
/// atomic suffices.
#[derive(Debug, Clone)]
pub struct NoLogger {
    /// Iteration count that triggers a timeout; negative for no timeout.
    iter_bound: i64,
    /// Set by the timer thread when the wall-clock deadline fires.
    stop_flag: Arc<AtomicBool>,
}

impl NoLogger {
    /// Creates a logger with both timeout mechanisms disabled.
    #[inline]
    pub fn new() -> Self {
        Self {
            iter_bound: -1,
            stop_flag: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Arms the iteration bound unless `bound` is negative.
    pub(crate) fn arm_iter_bound(&mut self, bound: i64) {
        if bound < 0 {
            return;
        }
        self.iter_bound = bound;
    }

    /// Arms the wall-clock deadline unless `millis` is negative.
    ///
    /// A zero deadline sets the stop flag synchronously, making a 0 cap a
    /// deterministic immediate timeout. Failure to spawn the timer thread is
    /// swallowed; the search then degrades to "no wall-clock timeout".
    pub(crate) fn arm_wall_deadline(&mut self, millis: i64) {
        if millis < 0 {
            return;
        }
        if millis == 0 {
            self.stop_flag.store(true, Ordering::Relaxed);
            return;
        }
        let flag = Arc::clone(&self.stop_flag);
        let _ = thread::Builder::new()
            .name("arbor-wall-timeout".to_owned())
            .spawn(move || {
                thread::sleep(Duration::from_millis(millis as u64));
                flag.store(true, Ordering::Relaxed);
            });
    }

    /// Returns an error once the stop flag is set or the iteration bound is
    /// reached.
    pub(crate) fn check(&self, iter: u64) -> Result<(), TimeoutError> {
        if self.stop_flag.load(Ordering::Relaxed)
            || (self.iter_bound >= 0 && iter >= self.iter_bound as u64)
        {
            return Err(TimeoutError { iter });
        }
        Ok(())
    }
}

impl Default for NoLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl<G> SearchLogger<G> for NoLogger
where
    G: Generator,
{
    #[inline(always)]
    fn log(&mut self, _event: SearchEvent, _iter: u64, _stack: &[CountingGenerator<G>]) {}

    #[inline(always)]
    fn log_strengthen(
        &mut self,
        _objective_json: &str,
        _iter: u64,
        _stack: &[CountingGenerator<G>],
    ) {
    }

    fn set_iter_timeout(&mut self, bound: i64) {
        self.arm_iter_bound(bound);
    }

    fn set_wall_timeout(&mut self, millis: i64) {
        self.arm_wall_deadline(millis);
    }

    #[inline]
    fn timeout(
        &mut self,
        iter: u64,
        _stack: &[CountingGenerator<G>],
    ) -> Result<(), TimeoutError> {
        self.check(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_logger_never_times_out() {
        let logger = NoLogger::new();
        for iter in [0, 1, 1_000_000] {
            assert!(logger.check(iter).is_ok());
        }
    }

    #[test]
    fn test_iteration_bound_fires_at_the_bound() {
        let mut logger = NoLogger::new();
        logger.arm_iter_bound(3);
        assert!(logger.check(2).is_ok());
        assert_eq!(logger.check(3), Err(TimeoutError { iter: 3 }));
        assert_eq!(logger.check(4), Err(TimeoutError { iter: 4 }));
    }

    #[test]
    fn test_negative_bound_does_not_clear_an_armed_bound() {
        let mut logger = NoLogger::new();
        logger.arm_iter_bound(2);
        logger.arm_iter_bound(-1);
        assert!(logger.check(2).is_err());
    }

    #[test]
    fn test_iteration_bound_zero_fires_immediately() {
        let mut logger = NoLogger::new();
        logger.arm_iter_bound(0);
        assert!(logger.check(1).is_err());
    }

    #[test]
    fn test_zero_wall_deadline_sets_flag_synchronously() {
        let mut logger = NoLogger::new();
        logger.arm_wall_deadline(0);
        assert!(logger.check(1).is_err());
    }

    #[test]
    fn test_wall_deadline_fires_after_the_delay() {
        let mut logger = NoLogger::new();
        logger.arm_wall_deadline(10);
        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        while logger.check(1).is_ok() {
            assert!(
                std::time::Instant::now() < deadline,
                "deadline did not fire within five seconds"
            );
            thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn test_negative_wall_deadline_is_ignored() {
        let mut logger = NoLogger::new();
        logger.arm_wall_deadline(-1);
        assert!(logger.check(u64::MAX).is_ok());
    }
}
