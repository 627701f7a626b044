//! Base payoff variants on a single underlying.

use cbond_core::error::PayoffError;
use cbond_core::traits::{ensure_aligned, ensure_before_maturity, Payoff};
use num_traits::Float;

/// A forward contract settling `S - K` at maturity.
///
/// Uses the protocol's provided behaviour everywhere except `terminal`:
/// no default recovery, no early-exercise adjustment. Unlike a call the
/// settlement is unclamped and goes negative below the delivery price.
///
/// # Examples
///
/// ```
/// use cbond_models::vanilla::Forward;
/// use cbond_core::traits::Payoff;
///
/// let forward = Forward::new(1.0, 100.0);
/// assert_eq!(forward.terminal(&[90.0, 110.0]), vec![-10.0, 10.0]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Forward<T: Float> {
    maturity: T,
    strike: T,
}

impl<T: Float> Forward<T> {
    /// Creates a forward with the given maturity and delivery price.
    #[inline]
    pub fn new(maturity: T, strike: T) -> Self {
        Self { maturity, strike }
    }

    /// Returns the delivery price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }
}

impl<T: Float> Payoff<T> for Forward<T> {
    fn maturity(&self) -> T {
        self.maturity
    }

    fn terminal(&self, prices: &[T]) -> Vec<T> {
        prices.iter().map(|&s| s - self.strike).collect()
    }
}

/// A European call paying `max(S - K, 0)` at maturity only.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EuropeanCall<T: Float> {
    maturity: T,
    strike: T,
}

impl<T: Float> EuropeanCall<T> {
    /// Creates a European call.
    ///
    /// # Arguments
    ///
    /// * `maturity` - Exercise time
    /// * `strike` - Strike price
    #[inline]
    pub fn new(maturity: T, strike: T) -> Self {
        Self { maturity, strike }
    }

    /// Returns the strike.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }
}

impl<T: Float> Payoff<T> for EuropeanCall<T> {
    fn maturity(&self) -> T {
        self.maturity
    }

    fn terminal(&self, prices: &[T]) -> Vec<T> {
        prices
            .iter()
            .map(|&s| (s - self.strike).max(T::zero()))
            .collect()
    }
}

/// An American call exercisable at any solver layer before maturity.
///
/// `transient` lifts the continuation value to the immediate exercise value
/// whenever exercising dominates holding. A zero-strike American call is the
/// conversion leg of a convertible bond: its transient value is
/// `max(V, S)` and its terminal value the share price itself.
///
/// # Examples
///
/// ```
/// use cbond_models::vanilla::AmericanCall;
/// use cbond_core::traits::Payoff;
///
/// let conversion = AmericanCall::new(5.0, 0.0);
/// let held = conversion.transient(3.0, &[104.0, 104.0], &[90.0, 120.0]).unwrap();
/// assert_eq!(held, vec![104.0, 120.0]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AmericanCall<T: Float> {
    maturity: T,
    strike: T,
}

impl<T: Float> AmericanCall<T> {
    /// Creates an American call.
    ///
    /// # Arguments
    ///
    /// * `maturity` - Final exercise time
    /// * `strike` - Strike price
    #[inline]
    pub fn new(maturity: T, strike: T) -> Self {
        Self { maturity, strike }
    }

    /// Returns the strike.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }
}

impl<T: Float> Payoff<T> for AmericanCall<T> {
    fn maturity(&self) -> T {
        self.maturity
    }

    fn transient(&self, t: T, continuation: &[T], prices: &[T]) -> Result<Vec<T>, PayoffError> {
        ensure_before_maturity("transient", t, self.maturity)?;
        ensure_aligned(prices.len(), continuation.len())?;
        Ok(continuation
            .iter()
            .zip(prices)
            .map(|(&v, &s)| v.max(s - self.strike))
            .collect())
    }

    fn terminal(&self, prices: &[T]) -> Vec<T> {
        prices
            .iter()
            .map(|&s| (s - self.strike).max(T::zero()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRICES: [f64; 4] = [80.0, 95.0, 105.0, 120.0];

    #[test]
    fn test_forward_terminal_is_unclamped() {
        let forward = Forward::new(1.0, 100.0);
        assert_eq!(forward.terminal(&PRICES), vec![-20.0, -5.0, 5.0, 20.0]);
    }

    #[test]
    fn test_forward_default_is_zero() {
        let forward = Forward::new(1.0, 100.0);
        assert_eq!(forward.default(0.5, &PRICES).unwrap(), vec![0.0; 4]);
    }

    #[test]
    fn test_forward_transient_is_identity() {
        let forward = Forward::new(1.0, 100.0);
        let held = [10.0, 20.0, 30.0, 40.0];
        assert_eq!(
            forward.transient(0.5, &held, &PRICES).unwrap(),
            held.to_vec()
        );
    }

    #[test]
    fn test_european_terminal_clamps_at_zero() {
        let call = EuropeanCall::new(1.0, 100.0);
        assert_eq!(call.terminal(&PRICES), vec![0.0, 0.0, 5.0, 20.0]);
    }

    #[test]
    fn test_european_transient_never_exercises() {
        let call = EuropeanCall::new(1.0, 100.0);
        let held = [1.0, 1.0, 1.0, 1.0];
        assert_eq!(call.transient(0.5, &held, &PRICES).unwrap(), held.to_vec());
    }

    #[test]
    fn test_american_transient_takes_exercise_maximum() {
        let call = AmericanCall::new(1.0, 100.0);
        let held = [1.0, 1.0, 1.0, 1.0];
        assert_eq!(
            call.transient(0.5, &held, &PRICES).unwrap(),
            vec![1.0, 1.0, 5.0, 20.0]
        );
    }

    #[test]
    fn test_american_zero_strike_is_conversion() {
        let conversion = AmericanCall::new(5.0, 0.0);
        let held = [104.0; 4];
        assert_eq!(
            conversion.transient(3.0, &held, &PRICES).unwrap(),
            vec![104.0, 104.0, 105.0, 120.0]
        );
        assert_eq!(conversion.terminal(&PRICES), PRICES.to_vec());
    }

    #[test]
    fn test_transient_at_maturity_is_rejected() {
        let call = AmericanCall::new(1.0, 100.0);
        let result = call.transient(1.0, &[0.0; 4], &PRICES);
        assert!(matches!(
            result,
            Err(PayoffError::PreconditionViolation { .. })
        ));
    }

    #[test]
    fn test_transient_shape_mismatch_is_rejected() {
        let call = AmericanCall::new(1.0, 100.0);
        let result = call.transient(0.5, &[0.0; 3], &PRICES);
        assert_eq!(
            result.unwrap_err(),
            PayoffError::ShapeMismatch {
                expected: 4,
                actual: 3
            }
        );
    }
}
