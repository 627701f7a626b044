//! Time-membership tests for restricted exercise rights.

use num_traits::Float;

/// Capability for rights that apply only during part of an instrument's life.
///
/// A put that may be exercised on a single date, or a call restricted to an
/// interval of dates, answers "is time `t` inside my active window". The
/// decision classifier uses this to decide whether an exact-value match at a
/// grid point can be attributed to that right at all.
///
/// # Type Parameters
/// * `T` - Floating-point type for times (e.g., `f64`)
pub trait ExerciseWindow<T: Float> {
    /// Returns whether the right is active at time `t`.
    fn is_active(&self, t: T) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Always;

    impl ExerciseWindow<f64> for Always {
        fn is_active(&self, _t: f64) -> bool {
            true
        }
    }

    #[test]
    fn test_object_safety() {
        let w: Box<dyn ExerciseWindow<f64>> = Box::new(Always);
        assert!(w.is_active(1.0));
    }
}
