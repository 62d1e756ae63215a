//! Canonical assertion logging macros
//!
//! Every assertion outcome is logged through these macros so events carry
//! the same field set regardless of which assertion produced them.

/// Log a passing assertion
///
/// # Example
///
/// ```
/// # use verdict_core::log_assert_pass;
/// log_assert_pass!("equal");
/// ```
#[macro_export]
macro_rules! log_assert_pass {
    ($op:expr) => {{
        let thread = ::std::thread::current();
        $crate::tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::verdict_core_types::schema::EVENT_PASS,
            test = thread.name().unwrap_or($crate::verdict_core_types::schema::UNNAMED_TEST),
        );
    }};
}

/// Log a failing assertion
///
/// # Example
///
/// ```
/// # use verdict_core::{log_assert_fail, errors::AssertionFailure};
/// let failure = AssertionFailure::MissingError;
/// log_assert_fail!("error", failure);
/// ```
#[macro_export]
macro_rules! log_assert_fail {
    ($op:expr, $failure:expr) => {{
        let failure: &$crate::errors::AssertionFailure = &$failure;
        let thread = ::std::thread::current();
        $crate::tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::verdict_core_types::schema::EVENT_FAIL,
            test = thread.name().unwrap_or($crate::verdict_core_types::schema::UNNAMED_TEST),
            err.kind = ?failure.kind(),
            err.code = failure.code(),
        );
    }};
}
