//! Presenter-facing data layer for the daily footprint estimator.
//!
//! This crate turns a [`footprint_core::Footprint`] into the numbers a
//! presentation layer would display. It performs no rendering itself:
//! widgets, chart styling and page layout belong to whatever host consumes
//! these values.
//!
//! # Module Organisation
//!
//! - `metrics`: headline and secondary metrics, formatted to two decimals
//! - `charts`: proportional (pie) and ranked (bar) data over the seven
//!   footprint components
//! - `correlation`: a rolling history of activity samples and the pairwise
//!   Pearson correlation matrix across them

pub mod charts;
pub mod correlation;
pub mod metrics;

pub use charts::{pie_slices, ranked_bars, ChartSlice};
pub use correlation::{ActivitySample, SampleHistory, ACTIVITY_VARIABLES};
pub use metrics::{headline_metrics, secondary_metrics, Metric};
