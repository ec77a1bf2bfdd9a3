//! Chart data over the seven footprint components.
//!
//! Two views of the same values: proportional shares for a pie chart and a
//! ranked list for a horizontal bar chart. Only the data is produced here;
//! drawing is the host's concern.

use footprint_core::{FloatValue, Footprint, FootprintComponent};
use serde::{Deserialize, Serialize};

/// One component's slice of the proportional chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSlice {
    pub component: FootprintComponent,
    /// Raw component value (kg CO₂/day, or liters/day for water)
    pub value: FloatValue,
    /// Fraction of the seven-component sum, in [0, 1]
    pub share: FloatValue,
}

impl ChartSlice {
    /// Share formatted as a percentage with one decimal, pie-label style.
    pub fn percentage_label(&self) -> String {
        format!("{:.1}%", self.share * 100.0)
    }
}

/// Proportional slices over all seven components, in presentation order.
///
/// Shares sum to 1.0 for any footprint with a non-zero component sum. An
/// all-zero footprint yields all-zero shares rather than NaN.
pub fn pie_slices(footprint: &Footprint) -> Vec<ChartSlice> {
    let components = footprint.components();
    let total: FloatValue = components.iter().map(|(_, v)| v).sum();

    components
        .into_iter()
        .map(|(component, value)| ChartSlice {
            component,
            value,
            share: if total > 0.0 { value / total } else { 0.0 },
        })
        .collect()
}

/// The seven components ranked by value, largest first.
///
/// Ties keep their relative presentation order (stable sort).
pub fn ranked_bars(footprint: &Footprint) -> Vec<(FootprintComponent, FloatValue)> {
    let mut bars: Vec<_> = footprint.components().into_iter().collect();
    bars.sort_by(|a, b| b.1.partial_cmp(&a.1).expect("component values are finite"));
    bars
}
