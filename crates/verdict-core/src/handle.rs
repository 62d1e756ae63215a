//! Test handle capability
//!
//! Assertions never talk to a test framework directly. They report through a
//! [`TestHandle`], which is created per test and owned by the test itself.
//!
//! [`StdHandle`] binds the capability to the built-in Rust test harness,
//! where a panic is how a test fails.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use verdict_core_types::schema::{EVENT_LOG, UNNAMED_TEST};

/// Capabilities an assertion needs from the owning test framework.
pub trait TestHandle {
    /// Record a failure and keep running.
    fn fail(&self);

    /// Record a failure and abort the current test.
    ///
    /// Implementations bound to a real harness must not return. Test doubles
    /// may return, so callers stop their own work right after calling it.
    fn fail_now(&self);

    /// Log a formatted message against the current test.
    fn log_fmt(&self, args: fmt::Arguments<'_>);

    /// Whether a failure has been recorded.
    fn failed(&self) -> bool;
}

impl<H: TestHandle + ?Sized> TestHandle for &H {
    fn fail(&self) {
        (**self).fail();
    }

    fn fail_now(&self) {
        (**self).fail_now();
    }

    fn log_fmt(&self, args: fmt::Arguments<'_>) {
        (**self).log_fmt(args);
    }

    fn failed(&self) -> bool {
        (**self).failed()
    }
}

/// Handle for tests run by the Rust test harness.
///
/// Logged messages are buffered and become the panic message when the test
/// aborts. A non-fatal failure recorded with [`TestHandle::fail`] is raised
/// when the handle is dropped.
#[derive(Debug)]
pub struct StdHandle {
    name: String,
    failed: AtomicBool,
    log: Mutex<Vec<String>>,
}

impl StdHandle {
    /// Create a handle for the named test
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            failed: AtomicBool::new(false),
            log: Mutex::new(Vec::new()),
        }
    }

    /// Create a handle named after the current thread
    ///
    /// The Rust test harness names each test thread after its test, so this
    /// picks up the test path (e.g. `tests::test_equal`).
    pub fn current() -> Self {
        let thread = std::thread::current();
        Self::new(thread.name().unwrap_or(UNNAMED_TEST))
    }

    /// Get the test name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get all messages logged so far
    pub fn messages(&self) -> Vec<String> {
        self.log
            .lock()
            .map(|log| log.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    fn report(&self) -> String {
        let mut report = format!("test {} failed", self.name);
        for message in self.messages() {
            report.push('\n');
            report.push_str(message.trim_end());
        }
        report
    }
}

impl Default for StdHandle {
    fn default() -> Self {
        Self::current()
    }
}

impl TestHandle for StdHandle {
    fn fail(&self) {
        self.failed.store(true, Ordering::SeqCst);
    }

    fn fail_now(&self) {
        self.fail();
        // The harness observes test failure as a panic on the test thread.
        panic!("{}", self.report());
    }

    fn log_fmt(&self, args: fmt::Arguments<'_>) {
        let message = args.to_string();
        tracing::info!(
            component = module_path!(),
            event = EVENT_LOG,
            test = %self.name,
            message = %message,
        );
        match self.log.lock() {
            Ok(mut log) => log.push(message),
            Err(poisoned) => poisoned.into_inner().push(message),
        }
    }

    fn failed(&self) -> bool {
        self.failed.load(Ordering::SeqCst)
    }
}

impl Drop for StdHandle {
    fn drop(&mut self) {
        if self.failed() && !std::thread::panicking() {
            panic!("{}", self.report());
        }
    }
}
