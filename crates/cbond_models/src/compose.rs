//! Composite payoff nodes.

use cbond_core::error::PayoffError;
use cbond_core::traits::{
    ensure_aligned, ensure_before_maturity, ExerciseWindow, Payoff, StrikeProvider,
};
use num_traits::Float;

/// A set of times during which a right is active.
///
/// Two shapes cover the contractual conventions: discrete exercise dates
/// (a Bermudan put exercisable on listed dates only) and closed spans
/// (a call protected until year two, callable thereafter). Date membership
/// is exact, mirroring the solver's convention of placing grid layers
/// exactly on contractual times.
///
/// # Examples
///
/// ```
/// use cbond_models::compose::TimeSet;
/// use cbond_core::traits::ExerciseWindow;
///
/// let put_dates = TimeSet::dates(vec![3.0]);
/// assert!(put_dates.is_active(3.0));
/// assert!(!put_dates.is_active(2.5));
///
/// let call_span = TimeSet::spans(vec![(2.0, 5.0)]);
/// assert!(call_span.is_active(2.0));
/// assert!(!call_span.is_active(1.99));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeSet<T: Float> {
    /// Discrete exercise dates, matched exactly.
    Dates(Vec<T>),
    /// Closed intervals `[start, end]`.
    Spans(Vec<(T, T)>),
}

impl<T: Float> TimeSet<T> {
    /// Creates a discrete-date time set.
    #[inline]
    pub fn dates(dates: Vec<T>) -> Self {
        Self::Dates(dates)
    }

    /// Creates a time set of closed intervals.
    #[inline]
    pub fn spans(spans: Vec<(T, T)>) -> Self {
        Self::Spans(spans)
    }
}

impl<T: Float> ExerciseWindow<T> for TimeSet<T> {
    fn is_active(&self, t: T) -> bool {
        match self {
            Self::Dates(dates) => dates.iter().any(|&d| d == t),
            Self::Spans(spans) => spans.iter().any(|&(start, end)| start <= t && t <= end),
        }
    }
}

/// Restricts an inner payoff to a [`TimeSet`].
///
/// Inside the window every operation delegates to the inner payoff. Outside
/// it, `transient` passes the continuation value through unchanged and
/// `default` is zero. `terminal` delegates only when the maturity itself
/// lies in the window, otherwise the right has lapsed and is worth nothing.
///
/// A windowed payoff forwards [`StrikeProvider`] from its inner leg, so the
/// decision classifier can query the strike of a windowed put directly.
#[derive(Clone, Debug)]
pub struct Windowed<T: Float, P> {
    inner: P,
    window: TimeSet<T>,
}

impl<T: Float, P: Payoff<T>> Windowed<T, P> {
    /// Restricts `inner` to the times in `window`.
    #[inline]
    pub fn new(inner: P, window: TimeSet<T>) -> Self {
        Self { inner, window }
    }

    /// Returns the wrapped payoff.
    #[inline]
    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<T: Float, P> ExerciseWindow<T> for Windowed<T, P> {
    #[inline]
    fn is_active(&self, t: T) -> bool {
        self.window.is_active(t)
    }
}

impl<T: Float, P: StrikeProvider<T>> StrikeProvider<T> for Windowed<T, P> {
    #[inline]
    fn strike(&self, t: T) -> T {
        self.inner.strike(t)
    }
}

impl<T: Float, P: Payoff<T>> Payoff<T> for Windowed<T, P> {
    fn maturity(&self) -> T {
        self.inner.maturity()
    }

    fn default(&self, t: T, prices: &[T]) -> Result<Vec<T>, PayoffError> {
        ensure_before_maturity("default", t, self.maturity())?;
        if self.window.is_active(t) {
            self.inner.default(t, prices)
        } else {
            Ok(vec![T::zero(); prices.len()])
        }
    }

    fn transient(&self, t: T, continuation: &[T], prices: &[T]) -> Result<Vec<T>, PayoffError> {
        ensure_before_maturity("transient", t, self.maturity())?;
        ensure_aligned(prices.len(), continuation.len())?;
        if self.window.is_active(t) {
            self.inner.transient(t, continuation, prices)
        } else {
            Ok(continuation.to_vec())
        }
    }

    fn terminal(&self, prices: &[T]) -> Vec<T> {
        if self.window.is_active(self.maturity()) {
            self.inner.terminal(prices)
        } else {
            vec![T::zero(); prices.len()]
        }
    }
}

/// A stack of payoff legs priced as one instrument.
///
/// The legs act in the order given:
/// - `transient` threads the continuation value through every leg in turn,
///   so each leg adjusts the value produced by the legs before it
/// - `default` sums the legs' recovery values
/// - `terminal` takes the element-wise maximum of the legs' terminal
///   values, the holder keeping whichever settlement is worth most
///
/// For a convertible bond the order is bond leg, holder put, issuer call,
/// conversion: the coupon lands before the put floor, the call caps the
/// couponed value, and conversion restores the share-price floor the cap
/// must not cut through.
///
/// All legs are expected to share the stack's maturity; a leg maturing
/// earlier fails its own precondition check once the solver steps past it.
pub struct Stack<T: Float> {
    legs: Vec<Box<dyn Payoff<T>>>,
    maturity: T,
}

impl<T: Float> Stack<T> {
    /// Creates a stack from its legs, ordered as they should act.
    ///
    /// # Panics
    ///
    /// Panics if `legs` is empty.
    pub fn new(legs: Vec<Box<dyn Payoff<T>>>) -> Self {
        assert!(!legs.is_empty(), "Stack requires at least one leg");
        let maturity = legs
            .iter()
            .map(|leg| leg.maturity())
            .fold(T::neg_infinity(), T::max);
        Self { legs, maturity }
    }
}

impl<T: Float> Payoff<T> for Stack<T> {
    fn maturity(&self) -> T {
        self.maturity
    }

    fn default(&self, t: T, prices: &[T]) -> Result<Vec<T>, PayoffError> {
        ensure_before_maturity("default", t, self.maturity)?;
        let mut total = vec![T::zero(); prices.len()];
        for leg in &self.legs {
            let values = leg.default(t, prices)?;
            ensure_aligned(total.len(), values.len())?;
            for (acc, v) in total.iter_mut().zip(values) {
                *acc = *acc + v;
            }
        }
        Ok(total)
    }

    fn transient(&self, t: T, continuation: &[T], prices: &[T]) -> Result<Vec<T>, PayoffError> {
        ensure_before_maturity("transient", t, self.maturity)?;
        ensure_aligned(prices.len(), continuation.len())?;
        let mut value = continuation.to_vec();
        for leg in &self.legs {
            value = leg.transient(t, &value, prices)?;
        }
        Ok(value)
    }

    fn terminal(&self, prices: &[T]) -> Vec<T> {
        let mut best = self.legs[0].terminal(prices);
        for leg in &self.legs[1..] {
            let values = leg.terminal(prices);
            assert_eq!(best.len(), values.len());
            for (acc, v) in best.iter_mut().zip(values) {
                *acc = acc.max(v);
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annuity::Annuity;
    use crate::exercise::{HolderPut, IssuerCall};
    use crate::schedule::CouponSchedule;
    use crate::vanilla::AmericanCall;
    use cbond_core::traits::FixedStrike;
    use std::sync::Arc;

    fn convertible() -> Stack<f64> {
        let times: Vec<f64> = (1..=10).map(|i| i as f64 * 0.5).collect();
        let schedule = Arc::new(CouponSchedule::new(times, 4.0, 100.0, 0.0).unwrap());
        let bond = Annuity::deferred(5.0, schedule).unwrap();
        let put = Windowed::new(
            HolderPut::new(5.0, FixedStrike::new(105.0)),
            TimeSet::dates(vec![3.0]),
        );
        let call = Windowed::new(
            IssuerCall::new(5.0, FixedStrike::new(110.0)),
            TimeSet::spans(vec![(2.0, 5.0)]),
        );
        let conversion = AmericanCall::new(5.0, 0.0);
        Stack::new(vec![
            Box::new(bond),
            Box::new(put),
            Box::new(call),
            Box::new(conversion),
        ])
    }

    #[test]
    fn test_dates_membership_is_exact() {
        let dates = TimeSet::dates(vec![1.0, 3.0]);
        assert!(dates.is_active(3.0));
        assert!(!dates.is_active(3.0000001));
    }

    #[test]
    fn test_spans_are_closed() {
        let spans = TimeSet::spans(vec![(2.0, 5.0)]);
        assert!(spans.is_active(2.0));
        assert!(spans.is_active(5.0));
        assert!(!spans.is_active(1.999));
        assert!(!spans.is_active(5.001));
    }

    #[test]
    fn test_windowed_is_identity_outside_window() {
        let put = Windowed::new(
            HolderPut::new(5.0, FixedStrike::new(105.0)),
            TimeSet::dates(vec![3.0]),
        );
        let held = [100.0, 100.0];
        let prices = [90.0, 120.0];
        assert_eq!(put.transient(2.5, &held, &prices).unwrap(), held.to_vec());
        assert_eq!(
            put.transient(3.0, &held, &prices).unwrap(),
            vec![105.0, 105.0]
        );
    }

    #[test]
    fn test_windowed_terminal_lapses_outside_window() {
        let put = Windowed::new(
            HolderPut::new(5.0, FixedStrike::new(105.0)),
            TimeSet::dates(vec![3.0]),
        );
        assert_eq!(put.terminal(&[90.0, 120.0]), vec![0.0, 0.0]);

        let live_put = Windowed::new(
            HolderPut::new(5.0, FixedStrike::new(105.0)),
            TimeSet::spans(vec![(0.0, 5.0)]),
        );
        assert_eq!(live_put.terminal(&[90.0, 120.0]), vec![15.0, 0.0]);
    }

    #[test]
    #[should_panic(expected = "at least one leg")]
    fn test_stack_rejects_no_legs() {
        let _ = Stack::<f64>::new(vec![]);
    }

    #[test]
    fn test_stack_maturity_is_latest_leg() {
        assert_eq!(convertible().maturity(), 5.0);
    }

    #[test]
    fn test_stack_terminal_is_best_settlement() {
        // Bond redeems nominal plus deferred coupon; conversion pays the
        // share price. The holder takes the larger of the two.
        let stack = convertible();
        assert_eq!(
            stack.terminal(&[80.0, 104.0, 120.0]),
            vec![104.0, 104.0, 120.0]
        );
    }

    #[test]
    fn test_stack_transient_threads_legs_in_order() {
        let stack = convertible();
        let held = [94.0, 100.0, 109.0, 115.0];
        let prices = [80.0, 95.0, 105.0, 125.0];

        // At t = 3.0 every right is live and the coupon is due. Coupon lifts
        // each value by 4; the put floors at 105; the call caps at
        // max(110, S); conversion floors at S.
        let values = stack.transient(3.0, &held, &prices).unwrap();
        assert_eq!(values, vec![105.0, 105.0, 110.0, 125.0]);
    }

    #[test]
    fn test_stack_transient_between_contract_dates() {
        let stack = convertible();
        let held = [94.0, 100.0, 109.0, 115.0];
        let prices = [80.0, 95.0, 105.0, 125.0];

        // At t = 1.25 no coupon is due, the put and call windows are both
        // closed; only the conversion floor applies.
        let values = stack.transient(1.25, &held, &prices).unwrap();
        assert_eq!(values, vec![94.0, 100.0, 109.0, 125.0]);
    }

    #[test]
    fn test_stack_default_sums_recoveries() {
        let times: Vec<f64> = (1..=10).map(|i| i as f64 * 0.5).collect();
        let schedule = Arc::new(CouponSchedule::new(times, 4.0, 100.0, 0.4).unwrap());
        let bond = Annuity::deferred(5.0, schedule).unwrap();
        let conversion = AmericanCall::new(5.0, 0.0);
        let stack = Stack::new(vec![Box::new(bond), Box::new(conversion)]);

        // Only the bond leg carries recovery; the option legs default to zero.
        assert_eq!(
            stack.default(2.0, &[90.0, 110.0]).unwrap(),
            vec![40.0, 40.0]
        );
    }

    #[test]
    fn test_stack_operations_at_maturity_are_rejected() {
        let stack = convertible();
        assert!(stack.transient(5.0, &[100.0], &[100.0]).is_err());
        assert!(stack.default(5.0, &[100.0]).is_err());
    }
}
