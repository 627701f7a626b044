//! Coupon schedule value type and accrued-interest interpolation.

use num_traits::Float;
use thiserror::Error;

/// Schedule-related errors.
///
/// Provides structured error handling for coupon schedule construction
/// with descriptive context for each failure mode.
///
/// # Variants
/// - `Empty`: the schedule has no payment times
/// - `NotIncreasing`: payment times are not strictly increasing
/// - `RecoveryOutOfRange`: recovery fraction outside `[0, 1]`
/// - `InvalidNominal`: nominal is not positive
/// - `ExtendsPastMaturity`: a payment time lies after the instrument maturity
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// The schedule has no payment times.
    #[error("Schedule has no payment times")]
    Empty,

    /// Payment times are not strictly increasing.
    #[error("Payment times are not strictly increasing at index {index}")]
    NotIncreasing {
        /// Index of the first out-of-order payment time
        index: usize,
    },

    /// The recovery fraction lies outside `[0, 1]`.
    #[error("Recovery fraction must lie in [0, 1]")]
    RecoveryOutOfRange,

    /// The nominal is not positive.
    #[error("Nominal must be positive")]
    InvalidNominal,

    /// The final payment time lies after the instrument maturity.
    #[error("Schedule extends past the instrument maturity")]
    ExtendsPastMaturity,
}

/// A coupon payment schedule for a bond leg.
///
/// Holds the ordered payment times, the flat coupon amount paid at each of
/// them, the nominal redeemed at maturity, and the recovery fraction of the
/// nominal paid on default. The schedule is immutable after construction and
/// is typically shared (via `Arc`) between the annuity leg and any
/// dirty-strike adjusters derived from it.
///
/// # Examples
///
/// ```
/// use cbond_models::schedule::CouponSchedule;
///
/// // Semi-annual coupon of 4 on a 5y nominal-100 bond, zero recovery.
/// let times: Vec<f64> = (1..=10).map(|i| i as f64 * 0.5).collect();
/// let schedule = CouponSchedule::new(times, 4.0, 100.0, 0.0).unwrap();
///
/// assert!(schedule.contains(3.0));
/// assert!(!schedule.contains(3.25));
/// assert_eq!(schedule.final_time(), 5.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CouponSchedule<T: Float> {
    times: Vec<T>,
    coupon: T,
    nominal: T,
    recovery: T,
}

impl<T: Float> CouponSchedule<T> {
    /// Creates a validated coupon schedule.
    ///
    /// # Arguments
    ///
    /// * `times` - Strictly increasing, non-empty payment times
    /// * `coupon` - Coupon amount paid at each payment time
    /// * `nominal` - Nominal redeemed at maturity
    /// * `recovery` - Fraction of the nominal paid on default, in `[0, 1]`
    ///
    /// # Errors
    ///
    /// Returns a [`ScheduleError`] if `times` is empty or not strictly
    /// increasing, `recovery` lies outside `[0, 1]`, or `nominal` is not
    /// positive.
    pub fn new(times: Vec<T>, coupon: T, nominal: T, recovery: T) -> Result<Self, ScheduleError> {
        if times.is_empty() {
            return Err(ScheduleError::Empty);
        }
        for index in 1..times.len() {
            if times[index] <= times[index - 1] {
                return Err(ScheduleError::NotIncreasing { index });
            }
        }
        if recovery < T::zero() || recovery > T::one() {
            return Err(ScheduleError::RecoveryOutOfRange);
        }
        if nominal <= T::zero() {
            return Err(ScheduleError::InvalidNominal);
        }
        Ok(Self {
            times,
            coupon,
            nominal,
            recovery,
        })
    }

    /// Returns the payment times.
    #[inline]
    pub fn times(&self) -> &[T] {
        &self.times
    }

    /// Returns the coupon amount paid at each payment time.
    #[inline]
    pub fn coupon(&self) -> T {
        self.coupon
    }

    /// Returns the nominal.
    #[inline]
    pub fn nominal(&self) -> T {
        self.nominal
    }

    /// Returns the recovery fraction.
    #[inline]
    pub fn recovery(&self) -> T {
        self.recovery
    }

    /// Returns the recovery payment on default, `recovery * nominal`.
    #[inline]
    pub fn recovery_value(&self) -> T {
        self.recovery * self.nominal
    }

    /// Returns the final payment time.
    #[inline]
    pub fn final_time(&self) -> T {
        // Constructor guarantees a non-empty schedule.
        *self.times.last().unwrap()
    }

    /// Returns whether `t` is exactly one of the payment times.
    #[inline]
    pub fn contains(&self, t: T) -> bool {
        self.times.iter().any(|&ti| ti == t)
    }

    /// Returns the interest accrued at time `t` since the last payment.
    ///
    /// Locates the schedule segment containing `t` and interpolates linearly:
    /// `coupon * (t - lower) / (upper - lower)`, where `lower` is the largest
    /// payment time at or before `t` (zero when `t` precedes the first
    /// payment) and `upper` the smallest payment time strictly after `t`.
    /// Accrued interest is exactly zero on every payment time: interest
    /// resets immediately after each coupon.
    ///
    /// At or beyond the final payment time no upper bound exists and the
    /// accrual is zero, frozen at the last reset. Callers must ensure the
    /// schedule covers the full life of any instrument querying it.
    ///
    /// # Examples
    ///
    /// ```
    /// use cbond_models::schedule::CouponSchedule;
    ///
    /// let times: Vec<f64> = (1..=10).map(|i| i as f64 * 0.5).collect();
    /// let schedule = CouponSchedule::new(times, 4.0, 100.0, 0.0).unwrap();
    ///
    /// assert_eq!(schedule.accrued(1.0), 0.0);
    /// assert_eq!(schedule.accrued(1.25), 2.0);
    /// ```
    pub fn accrued(&self, t: T) -> T {
        let mut lower = T::zero();
        for &ti in &self.times {
            if ti > t {
                return self.coupon * (t - lower) / (ti - lower);
            }
            lower = ti;
        }
        T::zero()
    }
}
