//! Expectation-checking test double
//!
//! [`TesterHandle`] stands in for a real handle when the thing under test is
//! an assertion. It swallows every fail and log signal, keeps them for
//! inspection, and finally checks whether a failure happened exactly when one
//! was expected, reporting any surprise to its parent handle.
//!
//! ```
//! use verdict_core::{equal, StdHandle, TesterHandle};
//!
//! let t = StdHandle::new("doc");
//! let tb = TesterHandle::new(&t, true);
//! equal(&tb, 1, 2);
//! tb.assert_expectation();
//! ```

use crate::handle::TestHandle;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// A handle that records signals instead of acting on them.
pub struct TesterHandle<'p> {
    parent: &'p dyn TestHandle,
    must_fail: bool,
    failed: AtomicBool,
    aborted: AtomicBool,
    log: Mutex<Vec<String>>,
}

impl<'p> TesterHandle<'p> {
    /// Create a double that expects a failure iff `must_fail`
    pub fn new(parent: &'p dyn TestHandle, must_fail: bool) -> Self {
        Self {
            parent,
            must_fail,
            failed: AtomicBool::new(false),
            aborted: AtomicBool::new(false),
            log: Mutex::new(Vec::new()),
        }
    }

    /// Whether the abort primitive was invoked
    pub fn aborted(&self) -> bool {
        self.aborted.load(Ordering::SeqCst)
    }

    /// Messages swallowed so far
    pub fn messages(&self) -> Vec<String> {
        self.log
            .lock()
            .map(|log| log.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// All swallowed messages joined into one string
    pub fn output(&self) -> String {
        self.messages().concat()
    }

    /// Report to the parent when the failure state differs from the expectation
    pub fn assert_expectation(&self) {
        let failed = self.failed();
        if failed != self.must_fail {
            self.parent.log_fmt(format_args!(
                "Failure was not as expected:\n > expected: {}\n < actual: {}\n > output: {}\n",
                self.must_fail,
                failed,
                self.output()
            ));
            self.parent.fail_now();
        }
    }
}

impl fmt::Debug for TesterHandle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TesterHandle")
            .field("must_fail", &self.must_fail)
            .field("failed", &self.failed())
            .field("aborted", &self.aborted())
            .finish()
    }
}

impl TestHandle for TesterHandle<'_> {
    fn fail(&self) {
        self.failed.store(true, Ordering::SeqCst);
    }

    fn fail_now(&self) {
        self.fail();
        self.aborted.store(true, Ordering::SeqCst);
    }

    fn log_fmt(&self, args: fmt::Arguments<'_>) {
        let message = args.to_string();
        match self.log.lock() {
            Ok(mut log) => log.push(message),
            Err(poisoned) => poisoned.into_inner().push(message),
        }
    }

    fn failed(&self) -> bool {
        self.failed.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handle::StdHandle;

    #[test]
    fn test_swallows_signals() {
        let parent = StdHandle::new("parent");
        let tb = TesterHandle::new(&parent, true);

        tb.log_fmt(format_args!("swallowed"));
        tb.fail_now();

        assert!(tb.failed());
        assert!(tb.aborted());
        assert_eq!(tb.output(), "swallowed");
        assert!(!parent.failed());
        assert!(parent.messages().is_empty());
        tb.assert_expectation();
    }

    #[test]
    fn test_non_fatal_fail_does_not_abort() {
        let parent = StdHandle::new("parent");
        let tb = TesterHandle::new(&parent, true);

        tb.fail();

        assert!(tb.failed());
        assert!(!tb.aborted());
        tb.assert_expectation();
    }

    #[test]
    fn test_unexpected_failure_reaches_parent() {
        let root = StdHandle::new("root");
        let parent = TesterHandle::new(&root, true);
        {
            let tb = TesterHandle::new(&parent, false);
            tb.fail_now();
            tb.assert_expectation();
        }

        assert!(parent.aborted());
        assert!(parent.output().contains("Failure was not as expected"));
    }

    #[test]
    fn test_missing_failure_reaches_parent() {
        let root = StdHandle::new("root");
        let parent = TesterHandle::new(&root, true);
        TesterHandle::new(&parent, true).assert_expectation();

        assert!(parent.failed());
        assert!(parent.output().contains("expected: true"));
    }
}
