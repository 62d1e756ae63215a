//! Verdict Core - assertions for unit tests
//!
//! This crate compares expected and actual values inside tests, reports
//! mismatches with readable diagnostics and halts the failing test:
//! - Structural deep equality, including across erased runtime types
//! - Order-insensitive slice and map matching that reports only leftovers
//! - Error, range and panic assertions
//! - A test handle abstraction with a harness-bound handle and a test double
//! - Structured logging of every assertion outcome
//!
//! ```
//! use verdict_core::{slices_match, StdHandle};
//!
//! let t = StdHandle::current();
//! slices_match(&t, &[1, 2, 2, 3], &[2, 3, 1, 2]);
//! ```

pub mod assertions;
pub mod differ;
pub mod equality;
pub mod errors;
pub mod handle;
pub mod logging_facility;
pub mod panic_capture;
pub mod tester;

// Used by the exported logging macros
#[doc(hidden)]
pub use tracing;
#[doc(hidden)]
pub use verdict_core_types;

// Re-export commonly used types
pub use assertions::{
    equal, error, errors_match, maps_match, no_error, not_panics, panics, slices_match, within,
};
pub use differ::{non_matching_maps, non_matching_slices, CollectionDiff, Mapping};
pub use equality::{deep_equal, dynamic, DynEq};
pub use errors::{AssertionFailure, FailureKind};
pub use handle::{StdHandle, TestHandle};
pub use panic_capture::{invoke_guarded, PanicOutcome};
pub use tester::TesterHandle;
