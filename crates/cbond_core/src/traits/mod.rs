//! Trait definitions for payoffs and classifier capabilities.
//!
//! This module provides:
//! - [`Payoff`]: the protocol every instrument exposes to the solver
//! - [`StrikeProvider`]: time-dependent exercise prices
//! - [`ExerciseWindow`]: time-membership tests for restricted rights
//! - [`CouponBearing`]: the coupon-leg queries the classifier needs
//! - [`FixedStrike`]: the trivial constant strike provider

pub mod coupon;
pub mod payoff;
pub mod strike;
pub mod window;

pub use coupon::CouponBearing;
pub use payoff::{ensure_aligned, ensure_before_maturity, Payoff};
pub use strike::{FixedStrike, StrikeProvider};
pub use window::ExerciseWindow;
