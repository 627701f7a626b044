//! Annuity-style coupon-bearing bond leg.

use crate::schedule::{CouponSchedule, ScheduleError};
use cbond_core::error::PayoffError;
use cbond_core::traits::{ensure_aligned, ensure_before_maturity, CouponBearing, Payoff};
use num_traits::Float;
use std::sync::Arc;

/// A bond leg paying a scheduled coupon, a nominal at maturity, and a
/// recovery fraction of the nominal on default.
///
/// The leg's value never depends on the underlying price: `terminal` is the
/// nominal everywhere, `default` the recovery payment everywhere, and
/// `transient` adds the coupon due at the current time to the continuation
/// value.
///
/// For bond-plus-option composites, [`Annuity::deferred`] builds the variant
/// that defers a final coupon falling on the maturity date into the terminal
/// value instead of paying it through `coupon`. This keeps coupon and nominal
/// from being counted twice when they coincide at maturity.
///
/// # Examples
///
/// ```
/// use cbond_models::annuity::Annuity;
/// use cbond_models::schedule::CouponSchedule;
/// use cbond_core::traits::{CouponBearing, Payoff};
/// use std::sync::Arc;
///
/// let times: Vec<f64> = (1..=10).map(|i| i as f64 * 0.5).collect();
/// let schedule = Arc::new(CouponSchedule::new(times, 4.0, 100.0, 0.0).unwrap());
/// let leg = Annuity::deferred(5.0, schedule).unwrap();
///
/// assert_eq!(leg.coupon(3.0), 4.0);
/// assert_eq!(leg.coupon(5.0), 0.0); // deferred into the terminal value
/// assert_eq!(leg.terminal(&[90.0, 110.0]), vec![104.0, 104.0]);
/// ```
#[derive(Clone, Debug)]
pub struct Annuity<T: Float> {
    maturity: T,
    schedule: Arc<CouponSchedule<T>>,
    defer_final_coupon: bool,
}

impl<T: Float> Annuity<T> {
    /// Creates an annuity leg paying every coupon on its scheduled date.
    ///
    /// # Arguments
    ///
    /// * `maturity` - Maturity of the instrument the leg belongs to
    /// * `schedule` - Shared coupon schedule
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::ExtendsPastMaturity`] when the schedule's
    /// final payment time lies after `maturity`; the leg must never have to
    /// rely on the flat accrual tail beyond its schedule.
    pub fn new(maturity: T, schedule: Arc<CouponSchedule<T>>) -> Result<Self, ScheduleError> {
        Self::build(maturity, schedule, false)
    }

    /// Creates the bond-plus-option variant deferring a maturity coupon.
    ///
    /// `coupon(t)` returns zero at the maturity itself; when the maturity is
    /// one of the scheduled payment dates, that final coupon is merged into
    /// the terminal value instead.
    ///
    /// # Errors
    ///
    /// Same as [`Annuity::new`].
    pub fn deferred(maturity: T, schedule: Arc<CouponSchedule<T>>) -> Result<Self, ScheduleError> {
        Self::build(maturity, schedule, true)
    }

    fn build(
        maturity: T,
        schedule: Arc<CouponSchedule<T>>,
        defer_final_coupon: bool,
    ) -> Result<Self, ScheduleError> {
        if schedule.final_time() > maturity {
            return Err(ScheduleError::ExtendsPastMaturity);
        }
        Ok(Self {
            maturity,
            schedule,
            defer_final_coupon,
        })
    }

    /// Returns the coupon schedule.
    #[inline]
    pub fn schedule(&self) -> &CouponSchedule<T> {
        &self.schedule
    }

    /// Returns a shared handle to the coupon schedule.
    ///
    /// Dirty-strike adjusters for puts and calls on the same bond are built
    /// from this handle so all legs observe one schedule.
    #[inline]
    pub fn schedule_handle(&self) -> Arc<CouponSchedule<T>> {
        Arc::clone(&self.schedule)
    }
}

impl<T: Float> CouponBearing<T> for Annuity<T> {
    fn coupon(&self, t: T) -> T {
        if self.defer_final_coupon && t == self.maturity {
            return T::zero();
        }
        if self.schedule.contains(t) {
            self.schedule.coupon()
        } else {
            T::zero()
        }
    }

    fn is_coupon_time(&self, t: T) -> bool {
        self.schedule.contains(t)
    }

    fn redemption_time(&self) -> T {
        self.maturity
    }
}

impl<T: Float> Payoff<T> for Annuity<T> {
    fn maturity(&self) -> T {
        self.maturity
    }

    fn default(&self, t: T, prices: &[T]) -> Result<Vec<T>, PayoffError> {
        ensure_before_maturity("default", t, self.maturity)?;
        Ok(vec![self.schedule.recovery_value(); prices.len()])
    }

    fn transient(&self, t: T, continuation: &[T], prices: &[T]) -> Result<Vec<T>, PayoffError> {
        ensure_before_maturity("transient", t, self.maturity)?;
        ensure_aligned(prices.len(), continuation.len())?;
        let coupon = self.coupon(t);
        Ok(continuation.iter().map(|&v| v + coupon).collect())
    }

    fn terminal(&self, prices: &[T]) -> Vec<T> {
        let mut value = self.schedule.nominal();
        if self.defer_final_coupon && self.schedule.contains(self.maturity) {
            value = value + self.schedule.coupon();
        }
        vec![value; prices.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leg(defer: bool) -> Annuity<f64> {
        let times: Vec<f64> = (1..=10).map(|i| i as f64 * 0.5).collect();
        let schedule = Arc::new(CouponSchedule::new(times, 4.0, 100.0, 0.2).unwrap());
        if defer {
            Annuity::deferred(5.0, schedule).unwrap()
        } else {
            Annuity::new(5.0, schedule).unwrap()
        }
    }

    #[test]
    fn test_schedule_past_maturity_is_rejected() {
        let schedule = Arc::new(CouponSchedule::new(vec![0.5, 6.0], 4.0, 100.0, 0.0).unwrap());
        let result = Annuity::new(5.0, schedule);
        assert_eq!(result.unwrap_err(), ScheduleError::ExtendsPastMaturity);
    }

    #[test]
    fn test_coupon_on_and_off_schedule() {
        let leg = leg(false);
        assert_eq!(leg.coupon(0.5), 4.0);
        assert_eq!(leg.coupon(0.75), 0.0);
        assert_eq!(leg.coupon(5.0), 4.0);
    }

    #[test]
    fn test_deferred_coupon_is_zero_at_maturity() {
        let leg = leg(true);
        assert_eq!(leg.coupon(4.5), 4.0);
        assert_eq!(leg.coupon(5.0), 0.0);
    }

    #[test]
    fn test_terminal_merges_deferred_coupon() {
        let prices = [80.0, 100.0, 120.0];
        assert_eq!(leg(false).terminal(&prices), vec![100.0; 3]);
        assert_eq!(leg(true).terminal(&prices), vec![104.0; 3]);
    }

    #[test]
    fn test_terminal_without_maturity_coupon_date() {
        // Final coupon at 4.5 < maturity 5.0: nothing to defer.
        let times: Vec<f64> = (1..=9).map(|i| i as f64 * 0.5).collect();
        let schedule = Arc::new(CouponSchedule::new(times, 4.0, 100.0, 0.0).unwrap());
        let leg = Annuity::deferred(5.0, schedule).unwrap();
        assert_eq!(leg.terminal(&[100.0]), vec![100.0]);
    }

    #[test]
    fn test_default_pays_recovery() {
        let leg = leg(false);
        let v = leg.default(2.0, &[80.0, 120.0]).unwrap();
        assert_eq!(v, vec![20.0, 20.0]);
    }

    #[test]
    fn test_default_at_maturity_fails() {
        let leg = leg(false);
        assert!(leg.default(5.0, &[100.0]).is_err());
    }

    #[test]
    fn test_transient_adds_coupon_on_schedule() {
        let leg = leg(true);
        let v = leg.transient(3.0, &[100.0, 101.0], &[90.0, 110.0]).unwrap();
        assert_eq!(v, vec![104.0, 105.0]);
    }

    #[test]
    fn test_transient_identity_off_schedule() {
        let leg = leg(true);
        let v = leg.transient(3.1, &[100.0, 101.0], &[90.0, 110.0]).unwrap();
        assert_eq!(v, vec![100.0, 101.0]);
    }

    #[test]
    fn test_redemption_time() {
        assert_eq!(leg(true).redemption_time(), 5.0);
    }
}
