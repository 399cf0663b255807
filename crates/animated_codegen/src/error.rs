//! Code generator error types

use thiserror::Error;

/// Errors raised while validating input or rendering overloads
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodegenError {
    /// Arity was zero or negative
    #[error("arity must be a positive integer, got {0}")]
    NonPositiveArity(i64),

    /// Arity exceeds what single-letter generic names can express
    #[error("arity {arity} exceeds the maximum of {max} (generic names run from A to Z)")]
    ArityTooLarge { arity: i64, max: usize },

    /// Combination index outside `0..4^N`
    #[error("combination {pointer} is out of range (arity has {count} combinations)")]
    PointerOutOfRange { pointer: u64, count: u64 },
}

/// Result type for code generation
pub type Result<T> = std::result::Result<T, CodegenError>;
