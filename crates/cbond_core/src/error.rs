//! Error types for payoff evaluation.
//!
//! This module provides [`PayoffError`], the error taxonomy shared by every
//! payoff operation. All payoff errors are fatal to the pricing run: the
//! external solver is expected to abort on the first failure rather than
//! retry or correct the call.

use thiserror::Error;

/// Payoff evaluation errors.
///
/// Provides structured error handling for the payoff protocol with
/// descriptive context for each failure mode.
///
/// # Variants
/// - `PreconditionViolation`: `default` or `transient` invoked at maturity
/// - `ShapeMismatch`: a value vector does not align with the price vector
///
/// # Examples
/// ```
/// use cbond_core::error::PayoffError;
///
/// let err = PayoffError::PreconditionViolation { operation: "default" };
/// assert!(format!("{}", err).contains("maturity"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PayoffError {
    /// `default` or `transient` was invoked with `t` equal to the maturity.
    /// The value at maturity must come exclusively from `terminal`.
    #[error("{operation} invoked at maturity; the maturity value must come from terminal")]
    PreconditionViolation {
        /// Name of the operation that was invoked
        operation: &'static str,
    },

    /// A value vector does not have the same number of elements as the price
    /// vector it accompanies. This indicates a programming error in a
    /// composed instrument and is never recovered.
    #[error("Shape mismatch: expected {expected} elements, got {actual}")]
    ShapeMismatch {
        /// Expected number of elements (the price vector length)
        expected: usize,
        /// Number of elements actually supplied or produced
        actual: usize,
    },
}
