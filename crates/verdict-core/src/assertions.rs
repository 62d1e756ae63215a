//! Assertion surface
//!
//! Every assertion reports a mismatch the same way: the diagnostic is logged
//! to the handle, a structured `fail` event is emitted, and the handle's
//! abort primitive is called. There is no soft-fail variant.

use crate::differ::{non_matching_maps, non_matching_slices, Mapping};
use crate::equality::deep_equal;
use crate::errors::AssertionFailure;
use crate::handle::TestHandle;
use crate::panic_capture::invoke_guarded;
use crate::{log_assert_fail, log_assert_pass};
use std::fmt::{Debug, Display};
use verdict_core_types::schema::{
    OP_EQUAL, OP_ERROR, OP_ERRORS_MATCH, OP_MAPS_MATCH, OP_NOT_PANICS, OP_NO_ERROR, OP_PANICS,
    OP_SLICES_MATCH, OP_WITHIN,
};

fn report<H: TestHandle + ?Sized>(h: &H, op: &'static str, failure: AssertionFailure) {
    log_assert_fail!(op, failure);
    h.log_fmt(format_args!("{}", failure));
    h.fail_now();
}

fn describe_error<E: Display + ?Sized>(error: Option<&E>) -> String {
    error.map_or_else(|| "None".to_string(), ToString::to_string)
}

/// Assert that `input` is `Ok`.
pub fn no_error<H, T, E>(h: &H, input: &Result<T, E>)
where
    H: TestHandle + ?Sized,
    E: Display,
{
    match input {
        Ok(_) => log_assert_pass!(OP_NO_ERROR),
        Err(error) => report(
            h,
            OP_NO_ERROR,
            AssertionFailure::UnexpectedError {
                error: error.to_string(),
            },
        ),
    }
}

/// Assert that `input` is `Err`.
pub fn error<H, T, E>(h: &H, input: &Result<T, E>)
where
    H: TestHandle + ?Sized,
{
    match input {
        Err(_) => log_assert_pass!(OP_ERROR),
        Ok(_) => report(h, OP_ERROR, AssertionFailure::MissingError),
    }
}

/// Assert that two optional errors are both absent, or both present with the
/// same `Display` text.
///
/// This lets a table-driven test carry a single expected-error column. Errors
/// are compared by their rendered text only, so two distinct types with the
/// same message match.
pub fn errors_match<H, A, B>(h: &H, expected: Option<&A>, input: Option<&B>)
where
    H: TestHandle + ?Sized,
    A: Display + ?Sized,
    B: Display + ?Sized,
{
    let matched = match (expected, input) {
        (None, None) => true,
        (Some(e), Some(i)) => e.to_string() == i.to_string(),
        _ => false,
    };

    if matched {
        log_assert_pass!(OP_ERRORS_MATCH);
        return;
    }

    report(
        h,
        OP_ERRORS_MATCH,
        AssertionFailure::ErrorsDiffer {
            expected: describe_error(expected),
            input: describe_error(input),
        },
    );
}

/// Assert that two values of the same type are structurally equal.
///
/// Equality is the type's `PartialEq`, so NaN never equals NaN. Compare
/// `&dyn DynEq` values to check across runtime types.
pub fn equal<H, T>(h: &H, expected: T, input: T)
where
    H: TestHandle + ?Sized,
    T: PartialEq + Debug,
{
    if deep_equal(&expected, &input) {
        log_assert_pass!(OP_EQUAL);
        return;
    }

    report(
        h,
        OP_EQUAL,
        AssertionFailure::NotEqual {
            expected: format!("{:?}", expected),
            input: format!("{:?}", input),
        },
    );
}

/// Assert that both slices hold the same elements regardless of order.
///
/// Slices of different lengths fail immediately with both lengths reported.
/// Otherwise only the unmatched elements of each side are reported.
pub fn slices_match<H, E>(h: &H, expected: &[E], input: &[E])
where
    H: TestHandle + ?Sized,
    E: PartialEq + Debug,
{
    if expected.len() != input.len() {
        report(
            h,
            OP_SLICES_MATCH,
            AssertionFailure::LengthMismatch {
                expected: expected.len(),
                input: input.len(),
            },
        );
        return;
    }

    // Elements are not required to be orderable or hashable, so this is the
    // quadratic matching
    let diff = non_matching_slices(expected, input);
    if diff.is_match() {
        log_assert_pass!(OP_SLICES_MATCH);
        return;
    }

    report(
        h,
        OP_SLICES_MATCH,
        AssertionFailure::ElementsDiffer {
            expected: format!("{:?}", diff.left),
            input: format!("{:?}", diff.right),
        },
    );
}

/// Assert that both mappings hold the same entries.
///
/// Never short-circuits on size: a `None` mapping must still match an empty
/// one. Only missing or disagreeing entries are reported.
pub fn maps_match<H, M>(h: &H, expected: &M, input: &M)
where
    H: TestHandle + ?Sized,
    M: Mapping,
    M::Key: Debug,
    M::Value: PartialEq + Debug,
{
    let diff = non_matching_maps(expected, input);
    if diff.is_match() {
        log_assert_pass!(OP_MAPS_MATCH);
        return;
    }

    report(
        h,
        OP_MAPS_MATCH,
        AssertionFailure::ElementsDiffer {
            expected: format!("{:?}", diff.left),
            input: format!("{:?}", diff.right),
        },
    );
}

/// Assert that `min <= input <= max`.
pub fn within<H, T>(h: &H, min: T, max: T, input: T)
where
    H: TestHandle + ?Sized,
    T: PartialOrd + Debug,
{
    if input < min || input > max {
        report(
            h,
            OP_WITHIN,
            AssertionFailure::OutOfRange {
                min: format!("{:?}", min),
                max: format!("{:?}", max),
                input: format!("{:?}", input),
            },
        );
        return;
    }

    log_assert_pass!(OP_WITHIN);
}

/// Assert that calling `f` panics.
pub fn panics<H, F>(h: &H, f: F)
where
    H: TestHandle + ?Sized,
    F: FnOnce(),
{
    let outcome = invoke_guarded(f);
    if outcome.raised() {
        log_assert_pass!(OP_PANICS);
        return;
    }

    report(
        h,
        OP_PANICS,
        AssertionFailure::DidNotPanic {
            function: std::any::type_name::<F>().to_string(),
            recovered: outcome.describe_payload(),
        },
    );
}

/// Assert that calling `f` returns without panicking.
pub fn not_panics<H, F>(h: &H, f: F)
where
    H: TestHandle + ?Sized,
    F: FnOnce(),
{
    let outcome = invoke_guarded(f);
    if !outcome.raised() {
        log_assert_pass!(OP_NOT_PANICS);
        return;
    }

    report(
        h,
        OP_NOT_PANICS,
        AssertionFailure::Panicked {
            function: std::any::type_name::<F>().to_string(),
            recovered: outcome.describe_payload(),
            stack: outcome.stack().to_string(),
        },
    );
}
