//! Error types for the Salary Engine.

use thiserror::Error;

/// Errors produced by the salary engine.
///
/// There is a single kind: the supplied gross salary was rejected, either
/// because it did not parse as a number or because it was not strictly
/// positive.  The message describes what was wrong with the value.  The
/// error is propagated directly to the caller; there is nothing to retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SalaryError {
    /// The gross salary was not a usable, strictly positive amount.
    #[error("invalid gross salary: {0}")]
    InvalidInput(String),
}
