//! Headline and secondary display metrics.
//!
//! Values are carried at full precision and formatted to two decimal places
//! only here, at the display boundary.

use footprint_core::{FloatValue, Footprint};
use serde::Serialize;
use std::fmt;

/// A single labelled value for display.
///
/// Labels are fixed at compile time, so the type is serialize-only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: FloatValue,
    pub unit: &'static str,
}

impl Metric {
    /// The value formatted to two decimal places, without unit.
    pub fn formatted_value(&self) -> String {
        format!("{:.2}", self.value)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.2} {}", self.label, self.value, self.unit)
    }
}

/// The three headline metrics: total carbon, total water, waste carbon.
pub fn headline_metrics(footprint: &Footprint) -> [Metric; 3] {
    [
        Metric {
            label: "Total Carbon Footprint",
            value: footprint.total_carbon,
            unit: "kg CO₂/day",
        },
        Metric {
            label: "Total Water Usage",
            value: footprint.total_water,
            unit: "liters/day",
        },
        Metric {
            label: "Total Waste Impact",
            value: footprint.waste,
            unit: "kg CO₂/day",
        },
    ]
}

/// The three secondary metrics: meat, plastic and smoking carbon.
pub fn secondary_metrics(footprint: &Footprint) -> [Metric; 3] {
    [
        Metric {
            label: "Meat Impact",
            value: footprint.meat,
            unit: "kg CO₂/day",
        },
        Metric {
            label: "Plastic Impact",
            value: footprint.plastic,
            unit: "kg CO₂/day",
        },
        Metric {
            label: "Smoking Impact",
            value: footprint.smoking,
            unit: "kg CO₂/day",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use footprint_core::{ActivityInputs, FootprintCalculator};

    fn typical_footprint() -> Footprint {
        FootprintCalculator::new().calculate(&ActivityInputs::default())
    }

    #[test]
    fn test_headline_metrics_values() {
        let metrics = headline_metrics(&typical_footprint());

        assert_eq!(metrics[0].label, "Total Carbon Footprint");
        assert_eq!(metrics[0].formatted_value(), "14.35");
        assert_eq!(metrics[1].label, "Total Water Usage");
        assert_eq!(metrics[1].formatted_value(), "60.00");
        assert_eq!(metrics[2].label, "Total Waste Impact");
        assert_eq!(metrics[2].formatted_value(), "2.00");
    }

    #[test]
    fn test_secondary_metrics_values() {
        let metrics = secondary_metrics(&typical_footprint());

        assert_eq!(metrics[0].formatted_value(), "5.00");
        assert_eq!(metrics[1].formatted_value(), "0.50");
        assert_eq!(metrics[2].formatted_value(), "0.00");
    }

    #[test]
    fn test_formatting_rounds_to_two_decimals() {
        let metric = Metric {
            label: "Total Carbon Footprint",
            value: 14.349_9,
            unit: "kg CO₂/day",
        };
        assert_eq!(metric.formatted_value(), "14.35");
    }

    #[test]
    fn test_display_includes_unit() {
        let metric = Metric {
            label: "Total Water Usage",
            value: 60.0,
            unit: "liters/day",
        };
        assert_eq!(metric.to_string(), "Total Water Usage: 60.00 liters/day");
    }
}
