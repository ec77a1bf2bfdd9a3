//! Core types and calculation for the daily environmental footprint estimator.
//!
//! This crate holds the one piece of real logic in the project: a pure
//! function mapping self-reported lifestyle activities to a set of named
//! footprint components (kg CO₂e, plus water in liters) using a fixed table
//! of emission and usage factors.
//!
//! # Module Organisation
//!
//! - `inputs`: the eight-field activity record and its domain bounds
//! - `factors`: the immutable emission/usage factor table
//! - `calculator`: the footprint calculation itself
//! - `errors`: crate error type and result alias
//!
//! The calculation is deterministic, side-effect free and constant time;
//! embedding hosts need no coordination beyond normal request isolation.

pub mod calculator;
pub mod errors;
pub mod factors;
pub mod inputs;

/// Float type used for all footprint quantities.
pub type FloatValue = f64;

pub use calculator::{Footprint, FootprintCalculator, FootprintComponent};
pub use errors::{FootprintError, FootprintResult};
pub use factors::{FootprintFactors, TransportFactors};
pub use inputs::{ActivityInputs, TransportMode};
