//! # cbond_models: Instrument Layer
//!
//! Payoff variants and composites for pricing path- and decision-dependent
//! instruments with an external backward-induction solver.
//!
//! This crate provides:
//! - Base payoff variants: [`Forward`](vanilla::Forward),
//!   [`EuropeanCall`](vanilla::EuropeanCall),
//!   [`AmericanCall`](vanilla::AmericanCall) (`vanilla`)
//! - The up-and-out knock-out decorator ([`UpAndOut`](barrier::UpAndOut))
//! - Coupon schedules and the annuity bond leg (`schedule`, `annuity`)
//! - The accrued-interest strike adjuster ([`DirtyStrike`](strike::DirtyStrike))
//! - Early-exercise legs over any strike provider
//!   ([`HolderPut`](exercise::HolderPut), [`IssuerCall`](exercise::IssuerCall))
//! - Composite nodes: [`Stack`](compose::Stack), [`Windowed`](compose::Windowed),
//!   [`TimeSet`](compose::TimeSet) (`compose`)
//!
//! ## Design Principles
//!
//! - **Explicit composition**: exercise direction and strike adjustment are
//!   separate capabilities joined by generics, not inheritance
//! - **Pure operations**: instruments hold only immutable construction
//!   parameters; every payoff call allocates its own result
//! - **Validated constructors** for anything with invariants (schedules)

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod annuity;
pub mod barrier;
pub mod compose;
pub mod exercise;
pub mod schedule;
pub mod strike;
pub mod vanilla;

pub use annuity::Annuity;
pub use barrier::UpAndOut;
pub use compose::{Stack, TimeSet, Windowed};
pub use exercise::{HolderPut, IssuerCall};
pub use schedule::{CouponSchedule, ScheduleError};
pub use strike::DirtyStrike;
pub use vanilla::{AmericanCall, EuropeanCall, Forward};
