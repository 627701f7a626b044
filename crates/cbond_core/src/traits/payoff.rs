//! The payoff protocol consumed by backward-induction solvers.
//!
//! A solver drives one pricing run by calling [`Payoff::terminal`] exactly
//! once at maturity and then, stepping backwards in time, [`Payoff::default`]
//! and [`Payoff::transient`] at every earlier time step. All three operations
//! are pure, shape-preserving functions over the solver's price vector.

use crate::error::PayoffError;
use num_traits::Float;

/// Checks that a non-terminal operation is not invoked at maturity.
///
/// The maturity value must come exclusively from `terminal`; invoking
/// `default` or `transient` there is a fatal caller error.
///
/// # Arguments
/// * `operation` - Name of the invoking operation (for the error message)
/// * `t` - The query time
/// * `maturity` - The payoff's maturity
#[inline]
pub fn ensure_before_maturity<T: Float>(
    operation: &'static str,
    t: T,
    maturity: T,
) -> Result<(), PayoffError> {
    if t == maturity {
        Err(PayoffError::PreconditionViolation { operation })
    } else {
        Ok(())
    }
}

/// Checks that a value vector aligns element-for-element with a price vector.
///
/// # Arguments
/// * `expected` - Length of the price vector
/// * `actual` - Length of the accompanying or produced value vector
#[inline]
pub fn ensure_aligned(expected: usize, actual: usize) -> Result<(), PayoffError> {
    if expected != actual {
        return Err(PayoffError::ShapeMismatch { expected, actual });
    }
    Ok(())
}

/// The capability set every instrument exposes to the solver.
///
/// All operations are element-wise over the price vector `prices`: position
/// `i` of the output corresponds to position `i` of the input, and no
/// ordering of the price values themselves may be assumed. Inputs are never
/// mutated; each call allocates its result.
///
/// Implementations hold only immutable construction parameters (strike,
/// barrier level, schedule), so the solver may invoke them in any order
/// across time steps without synchronisation.
///
/// The trait is object safe; composite instruments hold children as
/// `Box<dyn Payoff<T>>`.
///
/// # Type Parameters
///
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
///
/// # Required Methods
///
/// - [`maturity`](Payoff::maturity) - The instrument's maturity time
/// - [`terminal`](Payoff::terminal) - Value at maturity
///
/// # Provided Methods
///
/// - [`default`](Payoff::default) - Value on default (zero unless overridden)
/// - [`transient`](Payoff::transient) - Early-exercise adjustment (identity
///   unless overridden, i.e. European-style pass-through)
///
/// # Examples
///
/// ```
/// use cbond_core::traits::Payoff;
/// use num_traits::Float;
///
/// struct EuropeanCall<T: Float> {
///     maturity: T,
///     strike: T,
/// }
///
/// impl<T: Float> Payoff<T> for EuropeanCall<T> {
///     fn maturity(&self) -> T {
///         self.maturity
///     }
///
///     fn terminal(&self, prices: &[T]) -> Vec<T> {
///         prices.iter().map(|&s| (s - self.strike).max(T::zero())).collect()
///     }
/// }
///
/// let call = EuropeanCall { maturity: 1.0_f64, strike: 100.0 };
/// let continuation = [4.0, 6.0];
/// // European instruments pass the continuation value through unchanged.
/// let v = call.transient(0.5, &continuation, &[95.0, 105.0]).unwrap();
/// assert_eq!(v, continuation);
/// ```
pub trait Payoff<T: Float> {
    /// Returns the maturity time `T` of the instrument.
    fn maturity(&self) -> T;

    /// Returns the immediate payoff received if default occurs at time `t`.
    ///
    /// # Arguments
    ///
    /// * `t` - Current time, strictly before maturity
    /// * `prices` - The solver's price vector at this time step
    ///
    /// # Errors
    ///
    /// Returns [`PayoffError::PreconditionViolation`] when `t` equals the
    /// maturity; maturity has no default branch.
    fn default(&self, t: T, prices: &[T]) -> Result<Vec<T>, PayoffError> {
        ensure_before_maturity("default", t, self.maturity())?;
        Ok(vec![T::zero(); prices.len()])
    }

    /// Adjusts a continuation value for effects active at time `t`.
    ///
    /// Given the continuation value `continuation` computed by one backward
    /// step of the solver, returns the value after enforcing any
    /// early-exercise, knock-out, or coupon effects at `t`.
    ///
    /// # Arguments
    ///
    /// * `t` - Current time, strictly before maturity
    /// * `continuation` - Continuation values, aligned with `prices`
    /// * `prices` - The solver's price vector at this time step
    ///
    /// # Errors
    ///
    /// Returns [`PayoffError::PreconditionViolation`] when `t` equals the
    /// maturity, or [`PayoffError::ShapeMismatch`] when `continuation` and
    /// `prices` do not align.
    fn transient(&self, t: T, continuation: &[T], prices: &[T]) -> Result<Vec<T>, PayoffError> {
        ensure_before_maturity("transient", t, self.maturity())?;
        ensure_aligned(prices.len(), continuation.len())?;
        Ok(continuation.to_vec())
    }

    /// Returns the value at maturity as a pure function of the price vector.
    ///
    /// The time argument is implicit: `t` equals [`maturity`](Payoff::maturity).
    fn terminal(&self, prices: &[T]) -> Vec<T>;
}
