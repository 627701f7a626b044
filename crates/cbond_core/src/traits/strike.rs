//! Time-dependent exercise prices.

use num_traits::Float;

/// Capability for instruments whose exercise price varies with time.
///
/// The decision classifier queries `strike(t)` for the put and call legs at
/// every time step; early-exercise payoffs call it from `transient` and
/// `terminal` in place of a fixed strike field.
///
/// # Type Parameters
/// * `T` - Floating-point type for times and prices (e.g., `f64`)
pub trait StrikeProvider<T: Float> {
    /// Returns the exercise price effective at time `t`.
    fn strike(&self, t: T) -> T;
}

/// A constant exercise price.
///
/// The trivial [`StrikeProvider`]: `strike(t)` is the same value for every
/// `t`. Used by instruments whose strike carries no accrued-interest
/// adjustment.
///
/// # Examples
/// ```
/// use cbond_core::traits::{FixedStrike, StrikeProvider};
///
/// let k = FixedStrike::new(105.0_f64);
/// assert_eq!(k.strike(0.0), 105.0);
/// assert_eq!(k.strike(4.75), 105.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedStrike<T: Float> {
    strike: T,
}

impl<T: Float> FixedStrike<T> {
    /// Creates a constant strike provider.
    #[inline]
    pub fn new(strike: T) -> Self {
        Self { strike }
    }

    /// Returns the constant strike value.
    #[inline]
    pub fn value(&self) -> T {
        self.strike
    }
}

impl<T: Float> StrikeProvider<T> for FixedStrike<T> {
    #[inline]
    fn strike(&self, _t: T) -> T {
        self.strike
    }
}
