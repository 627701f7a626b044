//! Coupon-leg queries consumed by the decision classifier.

use num_traits::Float;

/// Capability exposed by a coupon-bearing bond leg.
///
/// The classifier strips the scheduled coupon from solved values at
/// non-terminal coupon dates before comparing them against exercise values,
/// and needs the redemption time to recognise the terminal layer of the grid.
///
/// # Type Parameters
/// * `T` - Floating-point type for times and amounts (e.g., `f64`)
pub trait CouponBearing<T: Float> {
    /// Returns the coupon paid at time `t` (zero off the schedule).
    fn coupon(&self, t: T) -> T;

    /// Returns whether `t` is a scheduled coupon date.
    fn is_coupon_time(&self, t: T) -> bool;

    /// Returns the time at which the nominal is redeemed.
    fn redemption_time(&self) -> T;
}
