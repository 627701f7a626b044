//! Early-exercise legs parameterised over a strike provider.

use cbond_core::error::PayoffError;
use cbond_core::traits::{ensure_aligned, ensure_before_maturity, Payoff, StrikeProvider};
use num_traits::Float;

/// A holder put: the right to sell back at the strike.
///
/// `transient` floors the continuation value at the prevailing strike. The
/// holder compares the value of keeping the instrument against surrendering
/// it for `strike(t)` and takes the larger, independent of the share price.
/// At maturity the put is an ordinary vanilla put on the underlying.
///
/// The strike is any [`StrikeProvider`], so a puttable bond plugs in a
/// [`DirtyStrike`](crate::strike::DirtyStrike) and a plain option a
/// [`FixedStrike`](cbond_core::traits::FixedStrike).
///
/// # Examples
///
/// ```
/// use cbond_models::exercise::HolderPut;
/// use cbond_core::traits::{FixedStrike, Payoff};
///
/// let put = HolderPut::new(5.0, FixedStrike::new(105.0));
/// let held = put.transient(3.0, &[100.0, 112.0], &[90.0, 120.0]).unwrap();
/// assert_eq!(held, vec![105.0, 112.0]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct HolderPut<T: Float, K> {
    maturity: T,
    strike: K,
}

impl<T: Float, K: StrikeProvider<T>> HolderPut<T, K> {
    /// Creates a holder put over the given strike provider.
    #[inline]
    pub fn new(maturity: T, strike: K) -> Self {
        Self { maturity, strike }
    }
}

impl<T: Float, K: StrikeProvider<T>> StrikeProvider<T> for HolderPut<T, K> {
    #[inline]
    fn strike(&self, t: T) -> T {
        self.strike.strike(t)
    }
}

impl<T: Float, K: StrikeProvider<T>> Payoff<T> for HolderPut<T, K> {
    fn maturity(&self) -> T {
        self.maturity
    }

    fn transient(&self, t: T, continuation: &[T], prices: &[T]) -> Result<Vec<T>, PayoffError> {
        ensure_before_maturity("transient", t, self.maturity)?;
        ensure_aligned(prices.len(), continuation.len())?;
        let strike = self.strike.strike(t);
        Ok(continuation.iter().map(|&v| v.max(strike)).collect())
    }

    fn terminal(&self, prices: &[T]) -> Vec<T> {
        let strike = self.strike.strike(self.maturity);
        prices
            .iter()
            .map(|&s| (strike - s).max(T::zero()))
            .collect()
    }
}

/// An issuer call: the issuer's right to redeem at the strike.
///
/// `transient` caps the continuation value at `max(strike(t), S)`. The
/// issuer redeems whenever the instrument is worth more than the call
/// price, but cannot call away value the holder would keep by converting,
/// so the cap never falls below the share price. `terminal` is zero: the
/// call right lapses at maturity.
#[derive(Clone, Copy, Debug)]
pub struct IssuerCall<T: Float, K> {
    maturity: T,
    strike: K,
}

impl<T: Float, K: StrikeProvider<T>> IssuerCall<T, K> {
    /// Creates an issuer call over the given strike provider.
    #[inline]
    pub fn new(maturity: T, strike: K) -> Self {
        Self { maturity, strike }
    }
}

impl<T: Float, K: StrikeProvider<T>> StrikeProvider<T> for IssuerCall<T, K> {
    #[inline]
    fn strike(&self, t: T) -> T {
        self.strike.strike(t)
    }
}

impl<T: Float, K: StrikeProvider<T>> Payoff<T> for IssuerCall<T, K> {
    fn maturity(&self) -> T {
        self.maturity
    }

    fn transient(&self, t: T, continuation: &[T], prices: &[T]) -> Result<Vec<T>, PayoffError> {
        ensure_before_maturity("transient", t, self.maturity)?;
        ensure_aligned(prices.len(), continuation.len())?;
        let strike = self.strike.strike(t);
        Ok(continuation
            .iter()
            .zip(prices)
            .map(|(&v, &s)| v.min(strike.max(s)))
            .collect())
    }

    fn terminal(&self, prices: &[T]) -> Vec<T> {
        vec![T::zero(); prices.len()]
    }
}
