use thiserror::Error;

/// Custom error type for the PicoGrad engine.
///
/// The engine is designed to never fail at the API level for well-formed
/// graphs: numeric edge cases (division by a zero-valued node, `exp`
/// overflow) propagate as IEEE infinity/NaN through values and gradients
/// rather than raising. The variants below cover the backward machinery's
/// internal contract only.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum PicoGradError {
    #[error("Gradient arity mismatch during '{operation}': {expected} operands, {actual} contributions")]
    ArityMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Internal error: {0}")]
    InternalError(String),
}
