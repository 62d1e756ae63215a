use thiserror::Error;
use verdict_core::{StdHandle, TesterHandle};

/// Run one table case through a test double and check its expectation
///
/// A surprise is reported to a `StdHandle` named after the case, which
/// panics and fails the surrounding test.
#[allow(dead_code)]
pub fn run_case<F>(name: &str, must_fail: bool, assertion: F)
where
    F: FnOnce(&TesterHandle<'_>),
{
    let t = StdHandle::new(name);
    let tb = TesterHandle::new(&t, must_fail);
    assertion(&tb);
    tb.assert_expectation();
}

/// Run one case and return everything the assertion logged
#[allow(dead_code)]
pub fn capture_output<F>(must_fail: bool, assertion: F) -> String
where
    F: FnOnce(&TesterHandle<'_>),
{
    let t = StdHandle::new("capture_output");
    let tb = TesterHandle::new(&t, must_fail);
    assertion(&tb);
    tb.assert_expectation();
    tb.output()
}

/// Error type for error-assertion tables
#[allow(dead_code)]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SampleError {
    #[error("{0}")]
    Message(String),

    #[error("record {id} not found")]
    NotFound { id: u32 },
}

#[allow(dead_code)]
pub fn sample(message: &str) -> SampleError {
    SampleError::Message(message.to_string())
}
