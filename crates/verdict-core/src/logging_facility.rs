//! Structured logging facility for Verdict
//!
//! This module provides:
//! - Single initialization point via `init(profile)`
//! - Structured assertion macros (`log_assert_pass!`, `log_assert_fail!`)
//! - Test capture mode for asserting on emitted events
//!
//! # Usage
//!
//! ```rust
//! use verdict_core::logging_facility::{init, Profile};
//!
//! // Initialize once, e.g. from a test helper
//! init(Profile::Development);
//! ```
//!
//! # Logging Macros
//!
//! - `log_assert_pass!(op)` - Log a passing assertion (debug level)
//! - `log_assert_fail!(op, failure)` - Log a failing assertion with its code

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
