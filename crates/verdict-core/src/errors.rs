use thiserror::Error;

// ========== Failure Facility ==========

/// Canonical failure kind taxonomy
///
/// Every assertion mismatch maps to exactly one kind, and each kind maps to a
/// stable code that log consumers and tests can match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    // Errors
    UnexpectedError,
    MissingError,
    ErrorsDiffer,

    // Values
    NotEqual,
    OutOfRange,

    // Collections
    LengthMismatch,
    ElementsDiffer,

    // Panics
    DidNotPanic,
    Panicked,
}

impl FailureKind {
    /// Get the stable failure code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            FailureKind::UnexpectedError => "ERR_UNEXPECTED_ERROR",
            FailureKind::MissingError => "ERR_MISSING_ERROR",
            FailureKind::ErrorsDiffer => "ERR_ERRORS_DIFFER",
            FailureKind::NotEqual => "ERR_NOT_EQUAL",
            FailureKind::OutOfRange => "ERR_OUT_OF_RANGE",
            FailureKind::LengthMismatch => "ERR_LENGTH_MISMATCH",
            FailureKind::ElementsDiffer => "ERR_ELEMENTS_DIFFER",
            FailureKind::DidNotPanic => "ERR_DID_NOT_PANIC",
            FailureKind::Panicked => "ERR_PANICKED",
        }
    }
}

/// Assertion mismatch taxonomy
///
/// The `Display` output of each variant is the diagnostic logged to the test
/// handle before it aborts. Operand values are stored pre-rendered so the
/// failure owns no borrowed data from the assertion call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssertionFailure {
    /// `no_error` received an error
    #[error("Unexpected error occurred\n > Error: {error}\n")]
    UnexpectedError { error: String },

    /// `error` received a success value
    #[error("expected error did not occur\n")]
    MissingError,

    /// `errors_match` saw differing errors
    #[error("Errors do not match\n > expected: {expected}\n < input:    {input}\n")]
    ErrorsDiffer { expected: String, input: String },

    /// `equal` saw structurally different values
    #[error("Values are not equal\n > expected: {expected}\n < input:    {input}\n")]
    NotEqual { expected: String, input: String },

    /// `within` saw a value outside the inclusive range
    #[error("value is not in the expected range\n > expected: [{min}, {max}]\n < input: {input}\n")]
    OutOfRange {
        min: String,
        max: String,
        input: String,
    },

    /// `slices_match` saw sequences of different lengths
    #[error(
        "Elements do not match, slices have different lengths\n > expected length: {expected}\n < input length:    {input}\n"
    )]
    LengthMismatch { expected: usize, input: usize },

    /// `slices_match` or `maps_match` found unmatched elements
    ///
    /// Only the residues are carried, never the full collections.
    #[error("Elements do not match\n > expected: {expected}\n < input:    {input}\n")]
    ElementsDiffer { expected: String, input: String },

    /// `panics` ran a function that returned normally
    #[error("function {function} did not panic\n > recovered value: {recovered}\n")]
    DidNotPanic { function: String, recovered: String },

    /// `not_panics` ran a function that panicked
    #[error("function {function} panicked\n > recovered value: {recovered}\n > stack: {stack}\n")]
    Panicked {
        function: String,
        recovered: String,
        stack: String,
    },
}

impl AssertionFailure {
    /// Get the failure kind
    pub fn kind(&self) -> FailureKind {
        match self {
            AssertionFailure::UnexpectedError { .. } => FailureKind::UnexpectedError,
            AssertionFailure::MissingError => FailureKind::MissingError,
            AssertionFailure::ErrorsDiffer { .. } => FailureKind::ErrorsDiffer,
            AssertionFailure::NotEqual { .. } => FailureKind::NotEqual,
            AssertionFailure::OutOfRange { .. } => FailureKind::OutOfRange,
            AssertionFailure::LengthMismatch { .. } => FailureKind::LengthMismatch,
            AssertionFailure::ElementsDiffer { .. } => FailureKind::ElementsDiffer,
            AssertionFailure::DidNotPanic { .. } => FailureKind::DidNotPanic,
            AssertionFailure::Panicked { .. } => FailureKind::Panicked,
        }
    }

    /// Get the stable failure code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}

// ========== End Failure Facility ==========
