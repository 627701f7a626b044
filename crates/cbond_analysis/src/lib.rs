//! # cbond_analysis: Decision Classification Layer
//!
//! Reconstructs, from a solved backward-induction grid, which economic
//! decision was optimal at every grid point.
//!
//! This crate provides:
//! - The read-only solved grid handed over by the solver
//!   ([`SolvedGrid`](grid::SolvedGrid))
//! - The six-way decision label and continuation band
//!   ([`Decision`](decision::Decision),
//!   [`ContinuationBand`](decision::ContinuationBand))
//! - The classifier pass itself ([`classify`](classifier::classify))
//!
//! The classifier never re-prices: it recognises decisions by comparing
//! solved values against the exercise values the instruments report, using
//! the same exact-equality convention the solver produced them under.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for decision labels and surfaces

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod classifier;
pub mod decision;
pub mod grid;

pub use classifier::classify;
pub use decision::{ContinuationBand, Decision, DecisionSurface};
pub use grid::{GridError, SolvedGrid};
