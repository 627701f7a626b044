//! # cbond_core: Payoff Protocol for Convertible Bond Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! cbond_core is the bottom layer of the workspace, providing:
//! - The [`Payoff`](traits::Payoff) protocol consumed by external
//!   backward-induction solvers (`traits::payoff`)
//! - Capability traits queried by the decision classifier:
//!   [`StrikeProvider`](traits::StrikeProvider),
//!   [`ExerciseWindow`](traits::ExerciseWindow),
//!   [`CouponBearing`](traits::CouponBearing)
//! - Error types: [`PayoffError`](error::PayoffError) (`error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other cbond_* crates, with minimal external
//! dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Structured error types
//! - serde: Serialisation support (optional)
//!
//! ## Usage Example
//!
//! ```rust
//! use cbond_core::traits::Payoff;
//! use num_traits::Float;
//!
//! struct Forward<T: Float> {
//!     maturity: T,
//!     strike: T,
//! }
//!
//! impl<T: Float> Payoff<T> for Forward<T> {
//!     fn maturity(&self) -> T {
//!         self.maturity
//!     }
//!
//!     fn terminal(&self, prices: &[T]) -> Vec<T> {
//!         prices.iter().map(|&s| s - self.strike).collect()
//!     }
//! }
//!
//! let forward = Forward { maturity: 1.0_f64, strike: 100.0 };
//! assert_eq!(forward.terminal(&[90.0, 110.0]), vec![-10.0, 10.0]);
//! // Default-branch and transient values come from the provided methods.
//! assert_eq!(forward.default(0.5, &[90.0, 110.0]).unwrap(), vec![0.0, 0.0]);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for capability value types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod traits;

#[cfg(test)]
mod tests {
    #[test]
    fn it_works() {
        assert_eq!(2 + 2, 4);
    }
}
