//! Emission and usage factor table.
//!
//! Factors convert a raw activity quantity into an impact unit (kg CO₂e, or
//! liters for water). The table is process-wide immutable configuration: it
//! is carried as an explicit value closed over by the calculator, never as
//! mutable global state, so the calculation stays pure and independently
//! testable.
//!
//! A deployment may override individual factors from a TOML snippet; fields
//! not named in the override keep their defaults.

use crate::errors::FootprintResult;
use crate::inputs::TransportMode;
use crate::FloatValue;
use serde::{Deserialize, Serialize};

/// Per-kilometre CO₂ factors for each transport mode.
///
/// Human-powered modes are zero by definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportFactors {
    /// kg CO₂ per km by car. Default: 0.21
    pub car: FloatValue,
    /// kg CO₂ per km by bus. Default: 0.05
    pub bus: FloatValue,
    /// kg CO₂ per km by bicycle. Default: 0.0
    pub bicycle: FloatValue,
    /// kg CO₂ per km on foot. Default: 0.0
    pub walk: FloatValue,
}

impl TransportFactors {
    /// Factor for a given mode.
    ///
    /// Total on the closed enum, so no lookup can miss.
    pub fn for_mode(&self, mode: TransportMode) -> FloatValue {
        match mode {
            TransportMode::Car => self.car,
            TransportMode::Bus => self.bus,
            TransportMode::Bicycle => self.bicycle,
            TransportMode::Walk => self.walk,
        }
    }
}

impl Default for TransportFactors {
    fn default() -> Self {
        Self {
            car: 0.21,
            bus: 0.05,
            bicycle: 0.0,
            walk: 0.0,
        }
    }
}

/// The full factor table for one footprint calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FootprintFactors {
    /// Per-mode transport factors (kg CO₂ / km)
    pub transport: TransportFactors,
    /// kg CO₂ per kWh of electricity. Default: 0.475
    pub electricity: FloatValue,
    /// Liters of water footprint per liter used. Default: 1.0
    pub water: FloatValue,
    /// kg CO₂ per kg of waste. Default: 2.0
    pub waste: FloatValue,
    /// kg CO₂ per meat meal. Default: 5.0
    pub meat_meal: FloatValue,
    /// Flat kg CO₂ charged when the person smokes, independent of any
    /// quantity. Default: 0.5
    pub smoking: FloatValue,
    /// kg CO₂ per plastic item. Default: 0.1
    pub plastic_item: FloatValue,
}

impl Default for FootprintFactors {
    fn default() -> Self {
        Self {
            transport: TransportFactors::default(),
            electricity: 0.475, // kg CO₂ / kWh
            water: 1.0,         // liter = 1 liter footprint
            waste: 2.0,         // kg CO₂ / kg
            meat_meal: 5.0,     // kg CO₂ / meal
            smoking: 0.5,       // kg CO₂, flat
            plastic_item: 0.1,  // kg CO₂ / item
        }
    }
}

impl FootprintFactors {
    /// Parse a factor table from TOML.
    ///
    /// Fields absent from the document keep their default values, so an
    /// override file only needs to name the factors it changes.
    pub fn from_toml_str(s: &str) -> FootprintResult<Self> {
        let factors: FootprintFactors = toml::from_str(s)?;
        log::debug!("Loaded factor table override: {:?}", factors);
        Ok(factors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FootprintError;

    #[test]
    fn test_default_factors() {
        let factors = FootprintFactors::default();

        assert_eq!(factors.transport.car, 0.21);
        assert_eq!(factors.transport.bus, 0.05);
        assert_eq!(factors.transport.bicycle, 0.0);
        assert_eq!(factors.transport.walk, 0.0);
        assert_eq!(factors.electricity, 0.475);
        assert_eq!(factors.water, 1.0);
        assert_eq!(factors.waste, 2.0);
        assert_eq!(factors.meat_meal, 5.0);
        assert_eq!(factors.smoking, 0.5);
        assert_eq!(factors.plastic_item, 0.1);
    }

    #[test]
    fn test_for_mode_covers_every_variant() {
        let factors = TransportFactors::default();

        assert_eq!(factors.for_mode(TransportMode::Car), 0.21);
        assert_eq!(factors.for_mode(TransportMode::Bus), 0.05);
        assert_eq!(factors.for_mode(TransportMode::Bicycle), 0.0);
        assert_eq!(factors.for_mode(TransportMode::Walk), 0.0);
    }

    #[test]
    fn test_human_powered_modes_are_free() {
        let factors = TransportFactors::default();
        for mode in [TransportMode::Bicycle, TransportMode::Walk] {
            assert_eq!(
                factors.for_mode(mode),
                0.0,
                "{} should carry no transport factor",
                mode
            );
        }
    }

    #[test]
    fn test_partial_toml_override() {
        let toml = r#"
            electricity = 0.2

            [transport]
            car = 0.15
        "#;
        let factors = FootprintFactors::from_toml_str(toml).unwrap();

        // Overridden fields
        assert_eq!(factors.electricity, 0.2);
        assert_eq!(factors.transport.car, 0.15);
        // Everything else keeps the defaults
        assert_eq!(factors.transport.bus, 0.05);
        assert_eq!(factors.meat_meal, 5.0);
        assert_eq!(factors.smoking, 0.5);
    }

    #[test]
    fn test_empty_toml_is_defaults() {
        let factors = FootprintFactors::from_toml_str("").unwrap();
        assert_eq!(factors, FootprintFactors::default());
    }

    #[test]
    fn test_malformed_toml_is_rejected() {
        let err = FootprintFactors::from_toml_str("electricity = \"lots\"").unwrap_err();
        assert!(matches!(err, FootprintError::InvalidFactorTable(_)));
    }

    #[test]
    fn test_serialization_round_trip() {
        let factors = FootprintFactors::default();
        let json = serde_json::to_string(&factors).unwrap();
        let restored: FootprintFactors = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, factors);
    }
}
