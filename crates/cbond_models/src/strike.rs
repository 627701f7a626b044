//! Accrued-interest strike adjustment.

use crate::schedule::CouponSchedule;
use cbond_core::traits::StrikeProvider;
use num_traits::Float;
use std::sync::Arc;

/// A strike quoted clean and paid dirty.
///
/// Put and call strikes on a coupon-bearing bond are quoted net of accrued
/// interest; the amount actually exchanged on exercise adds the interest
/// accrued since the last coupon. `strike(t)` returns
/// `clean + schedule.accrued(t)`, which collapses to the clean strike on
/// every payment date.
///
/// Shares the bond's [`CouponSchedule`] so the accrual basis cannot drift
/// from the leg paying the coupons.
///
/// # Examples
///
/// ```
/// use cbond_models::schedule::CouponSchedule;
/// use cbond_models::strike::DirtyStrike;
/// use cbond_core::traits::StrikeProvider;
/// use std::sync::Arc;
///
/// let times: Vec<f64> = (1..=10).map(|i| i as f64 * 0.5).collect();
/// let schedule = Arc::new(CouponSchedule::new(times, 4.0, 100.0, 0.0).unwrap());
/// let strike = DirtyStrike::new(105.0, schedule);
///
/// assert_eq!(strike.strike(3.0), 105.0);
/// assert_eq!(strike.strike(3.25), 107.0);
/// ```
#[derive(Clone, Debug)]
pub struct DirtyStrike<T: Float> {
    clean: T,
    schedule: Arc<CouponSchedule<T>>,
}

impl<T: Float> DirtyStrike<T> {
    /// Creates a dirty strike from a clean quote and the bond's schedule.
    #[inline]
    pub fn new(clean: T, schedule: Arc<CouponSchedule<T>>) -> Self {
        Self { clean, schedule }
    }

    /// Returns the clean strike.
    #[inline]
    pub fn clean(&self) -> T {
        self.clean
    }
}

impl<T: Float> StrikeProvider<T> for DirtyStrike<T> {
    fn strike(&self, t: T) -> T {
        self.clean + self.schedule.accrued(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn dirty(clean: f64) -> DirtyStrike<f64> {
        let times: Vec<f64> = (1..=10).map(|i| i as f64 * 0.5).collect();
        let schedule = Arc::new(CouponSchedule::new(times, 4.0, 100.0, 0.0).unwrap());
        DirtyStrike::new(clean, schedule)
    }

    #[test]
    fn test_strike_is_clean_on_payment_dates() {
        let strike = dirty(105.0);
        assert_eq!(strike.strike(2.5), 105.0);
        assert_eq!(strike.strike(3.0), 105.0);
    }

    #[test]
    fn test_strike_accrues_within_segment() {
        let strike = dirty(105.0);
        assert_relative_eq!(strike.strike(3.25), 107.0);
        let near_next = strike.strike(3.5 - 1e-9);
        assert_relative_eq!(near_next, 109.0, epsilon = 1e-6);
    }

    #[test]
    fn test_strike_resets_after_coupon() {
        let strike = dirty(110.0);
        assert_relative_eq!(strike.strike(3.49), 110.0 + 4.0 * 0.49 / 0.5, epsilon = 1e-12);
        assert_eq!(strike.strike(3.5), 110.0);
    }
}
