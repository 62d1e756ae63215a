//! Canonical schema constants for structured logging and events
//!
//! These constants keep assertion events consistent between the emitting
//! macros and the test capture layer.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_TEST: &str = "test";

// Failure fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_PASS: &str = "pass";
pub const EVENT_FAIL: &str = "fail";
pub const EVENT_LOG: &str = "log";

// Canonical operation names
pub const OP_NO_ERROR: &str = "no_error";
pub const OP_ERROR: &str = "error";
pub const OP_ERRORS_MATCH: &str = "errors_match";
pub const OP_EQUAL: &str = "equal";
pub const OP_SLICES_MATCH: &str = "slices_match";
pub const OP_MAPS_MATCH: &str = "maps_match";
pub const OP_WITHIN: &str = "within";
pub const OP_PANICS: &str = "panics";
pub const OP_NOT_PANICS: &str = "not_panics";

/// Name recorded in the `test` field when the current thread is unnamed.
pub const UNNAMED_TEST: &str = "<unnamed>";
