//! Daily footprint calculation.
//!
//! # What This Component Does
//!
//! Maps one [`ActivityInputs`] record to a [`Footprint`]: seven named
//! component values plus two totals, using the factor table it closes over.
//! Every component is the product of its activity quantity and a constant
//! factor,
//!
//! $$ c_i = q_i \cdot f_i $$
//!
//! with one deliberate exception: smoking is a flat factor gated by a
//! boolean, not a quantity-weighted cost.
//!
//! `total_carbon` is the unweighted sum of the six CO₂-denominated
//! components; water is tracked in liters and excluded from the carbon
//! total.
//!
//! The calculation is referentially transparent: no I/O, no hidden state,
//! identical inputs give identical outputs. It is also infallible, because
//! [`TransportMode`] is a closed enum and the factor lookup is total;
//! malformed mode strings are rejected at the parsing boundary before a
//! calculator is ever invoked.

use crate::factors::FootprintFactors;
use crate::inputs::{ActivityInputs, TransportMode};
use crate::FloatValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One named contributor to the overall impact estimate.
///
/// Declared in presentation order; [`Footprint::components`] yields values
/// in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FootprintComponent {
    Transport,
    Electricity,
    Waste,
    Water,
    Meat,
    Plastic,
    Smoking,
}

impl FootprintComponent {
    /// All components, in presentation order.
    pub const ALL: [FootprintComponent; 7] = [
        FootprintComponent::Transport,
        FootprintComponent::Electricity,
        FootprintComponent::Waste,
        FootprintComponent::Water,
        FootprintComponent::Meat,
        FootprintComponent::Plastic,
        FootprintComponent::Smoking,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FootprintComponent::Transport => "Transport",
            FootprintComponent::Electricity => "Electricity",
            FootprintComponent::Waste => "Waste",
            FootprintComponent::Water => "Water",
            FootprintComponent::Meat => "Meat",
            FootprintComponent::Plastic => "Plastic",
            FootprintComponent::Smoking => "Smoking",
        }
    }

    /// Unit of the component's value. Water is the only non-CO₂ component.
    pub fn unit(&self) -> &'static str {
        match self {
            FootprintComponent::Water => "liters/day",
            _ => "kg CO₂/day",
        }
    }
}

impl fmt::Display for FootprintComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of a footprint calculation.
///
/// All values are kg CO₂e/day except `water`/`total_water` (liters/day).
/// No rounding is applied here; formatting to two decimals is a
/// presentation concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    /// Travel: distance × per-km mode factor
    pub transport: FloatValue,
    /// Electricity usage × grid intensity
    pub electricity: FloatValue,
    /// Waste produced × disposal factor
    pub waste: FloatValue,
    /// Water usage in liters (unit conversion factor is 1)
    pub water: FloatValue,
    /// Meat meals × per-meal factor
    pub meat: FloatValue,
    /// Plastic items × per-item factor
    pub plastic: FloatValue,
    /// Flat smoking charge, or zero for non-smokers
    pub smoking: FloatValue,
    /// Sum of the six CO₂ components. Water is excluded.
    pub total_carbon: FloatValue,
    /// Water usage passed through unchanged
    pub total_water: FloatValue,
}

impl Footprint {
    /// The seven named components with their values, in presentation order.
    pub fn components(&self) -> [(FootprintComponent, FloatValue); 7] {
        [
            (FootprintComponent::Transport, self.transport),
            (FootprintComponent::Electricity, self.electricity),
            (FootprintComponent::Waste, self.waste),
            (FootprintComponent::Water, self.water),
            (FootprintComponent::Meat, self.meat),
            (FootprintComponent::Plastic, self.plastic),
            (FootprintComponent::Smoking, self.smoking),
        ]
    }

    /// The six CO₂-denominated components, i.e. everything but water.
    pub fn carbon_components(&self) -> [(FootprintComponent, FloatValue); 6] {
        [
            (FootprintComponent::Transport, self.transport),
            (FootprintComponent::Electricity, self.electricity),
            (FootprintComponent::Waste, self.waste),
            (FootprintComponent::Meat, self.meat),
            (FootprintComponent::Plastic, self.plastic),
            (FootprintComponent::Smoking, self.smoking),
        ]
    }
}

/// Pure calculator from activities to footprint.
///
/// Closes over an immutable [`FootprintFactors`] table; calculations carry
/// no state across calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FootprintCalculator {
    factors: FootprintFactors,
}

impl FootprintCalculator {
    /// Calculator with the default factor table.
    pub fn new() -> Self {
        Self::from_factors(FootprintFactors::default())
    }

    /// Calculator with an overridden factor table.
    pub fn from_factors(factors: FootprintFactors) -> Self {
        Self { factors }
    }

    /// The factor table in use.
    pub fn factors(&self) -> &FootprintFactors {
        &self.factors
    }

    /// Transport carbon: distance × per-km factor for the chosen mode.
    pub fn transport_carbon(&self, mode: TransportMode, distance_km: FloatValue) -> FloatValue {
        distance_km * self.factors.transport.for_mode(mode)
    }

    /// Flat smoking carbon, gated by the boolean.
    pub fn smoking_carbon(&self, smoking: bool) -> FloatValue {
        if smoking {
            self.factors.smoking
        } else {
            0.0
        }
    }

    /// Calculate the full footprint for one day of activities.
    ///
    /// The caller is expected to have validated the inputs against their
    /// domain bounds (see [`ActivityInputs::validate`]); nothing is clamped
    /// here.
    pub fn calculate(&self, inputs: &ActivityInputs) -> Footprint {
        let transport = self.transport_carbon(inputs.transport_mode, inputs.distance_km);
        let electricity = inputs.electricity_kwh * self.factors.electricity;
        let waste = inputs.waste_kg * self.factors.waste;
        let water = inputs.water_liters * self.factors.water;
        let meat = inputs.meat_meals as FloatValue * self.factors.meat_meal;
        let plastic = inputs.plastic_items as FloatValue * self.factors.plastic_item;
        let smoking = self.smoking_carbon(inputs.smoking);

        let total_carbon = transport + electricity + waste + meat + plastic + smoking;

        log::debug!(
            "Footprint for {} over {} km: {:.2} kg CO₂, {:.2} L water",
            inputs.transport_mode,
            inputs.distance_km,
            total_carbon,
            water
        );

        Footprint {
            transport,
            electricity,
            waste,
            water,
            meat,
            plastic,
            smoking,
            total_carbon,
            total_water: water,
        }
    }
}

impl Default for FootprintCalculator {
    fn default() -> Self {
        Self::new()
    }
}
