//! Up-and-out knock-out decorator.

use cbond_core::error::PayoffError;
use cbond_core::traits::{ensure_aligned, ensure_before_maturity, Payoff};
use num_traits::Float;

/// Knocks out an inner payoff at and above a barrier level.
///
/// At every operation the price vector is split by the predicate `S < L`:
/// surviving entries are forwarded to the inner payoff as a compacted
/// sub-vector, knocked-out entries are worth zero. The inner payoff never
/// sees a knocked-out price, so barrier logic composes with any payoff
/// without the inner type knowing about it.
///
/// Prices exactly at the barrier are knocked out.
///
/// # Examples
///
/// ```
/// use cbond_models::barrier::UpAndOut;
/// use cbond_models::vanilla::EuropeanCall;
/// use cbond_core::traits::Payoff;
///
/// let option = UpAndOut::new(EuropeanCall::new(1.0, 100.0), 110.0);
/// assert_eq!(option.terminal(&[95.0, 105.0, 115.0]), vec![0.0, 5.0, 0.0]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpAndOut<T: Float, P> {
    inner: P,
    level: T,
}

impl<T: Float, P: Payoff<T>> UpAndOut<T, P> {
    /// Wraps `inner` with a knock-out barrier at `level`.
    #[inline]
    pub fn new(inner: P, level: T) -> Self {
        Self { inner, level }
    }

    /// Returns the barrier level.
    #[inline]
    pub fn level(&self) -> T {
        self.level
    }

    /// Returns the wrapped payoff.
    #[inline]
    pub fn inner(&self) -> &P {
        &self.inner
    }

    fn surviving_indices(&self, prices: &[T]) -> Vec<usize> {
        prices
            .iter()
            .enumerate()
            .filter(|&(_, &s)| s < self.level)
            .map(|(index, _)| index)
            .collect()
    }

    fn scatter(&self, total: usize, indices: &[usize], values: Vec<T>) -> Vec<T> {
        let mut out = vec![T::zero(); total];
        for (&index, value) in indices.iter().zip(values) {
            out[index] = value;
        }
        out
    }
}

impl<T: Float, P: Payoff<T>> Payoff<T> for UpAndOut<T, P> {
    fn maturity(&self) -> T {
        self.inner.maturity()
    }

    fn default(&self, t: T, prices: &[T]) -> Result<Vec<T>, PayoffError> {
        ensure_before_maturity("default", t, self.maturity())?;
        let indices = self.surviving_indices(prices);
        let sub_prices: Vec<T> = indices.iter().map(|&i| prices[i]).collect();
        let sub_values = self.inner.default(t, &sub_prices)?;
        ensure_aligned(indices.len(), sub_values.len())?;
        Ok(self.scatter(prices.len(), &indices, sub_values))
    }

    fn transient(&self, t: T, continuation: &[T], prices: &[T]) -> Result<Vec<T>, PayoffError> {
        ensure_before_maturity("transient", t, self.maturity())?;
        ensure_aligned(prices.len(), continuation.len())?;
        let indices = self.surviving_indices(prices);
        let sub_prices: Vec<T> = indices.iter().map(|&i| prices[i]).collect();
        let sub_continuation: Vec<T> = indices.iter().map(|&i| continuation[i]).collect();
        let sub_values = self.inner.transient(t, &sub_continuation, &sub_prices)?;
        ensure_aligned(indices.len(), sub_values.len())?;
        Ok(self.scatter(prices.len(), &indices, sub_values))
    }

    fn terminal(&self, prices: &[T]) -> Vec<T> {
        let indices = self.surviving_indices(prices);
        let sub_prices: Vec<T> = indices.iter().map(|&i| prices[i]).collect();
        let sub_values = self.inner.terminal(&sub_prices);
        assert_eq!(indices.len(), sub_values.len());
        self.scatter(prices.len(), &indices, sub_values)
    }
}
