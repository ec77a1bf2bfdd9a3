//! Self-reported daily activity inputs.
//!
//! An [`ActivityInputs`] record is supplied once per computation by an input
//! collector (a form, a request body, a test). The collector is responsible
//! for enforcing the domain bounds via [`ActivityInputs::validate`] before
//! handing the record to the calculator; the calculator itself performs no
//! bounds checks and never clamps.

use crate::errors::{FootprintError, FootprintResult};
use crate::FloatValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the day's travel distance was covered.
///
/// A closed set: anything else is rejected at the string boundary by the
/// [`FromStr`] impl, so no unmapped factor lookup can occur downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransportMode {
    Car,
    Bus,
    Bicycle,
    Walk,
}

impl TransportMode {
    /// All modes, in form presentation order.
    pub const ALL: [TransportMode; 4] = [
        TransportMode::Car,
        TransportMode::Bus,
        TransportMode::Bicycle,
        TransportMode::Walk,
    ];

    /// Human-readable label, matching the serialized variant name.
    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::Car => "Car",
            TransportMode::Bus => "Bus",
            TransportMode::Bicycle => "Bicycle",
            TransportMode::Walk => "Walk",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TransportMode {
    type Err = FootprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Car" => Ok(TransportMode::Car),
            "Bus" => Ok(TransportMode::Bus),
            "Bicycle" => Ok(TransportMode::Bicycle),
            "Walk" => Ok(TransportMode::Walk),
            other => Err(FootprintError::InvalidTransportMode(other.to_string())),
        }
    }
}

/// One day of self-reported lifestyle activities.
///
/// # Domains
///
/// | Field | Domain |
/// |---|---|
/// | `electricity_kwh` | [0, 100] |
/// | `distance_km` | [0, 100] |
/// | `water_liters` | [0, 500] |
/// | `waste_kg` | [0, 10] |
/// | `meat_meals` | [0, 5] |
/// | `plastic_items` | [0, 50] |
///
/// [`validate`](ActivityInputs::validate) enforces these bounds and should be
/// called by whatever collects the values, before calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityInputs {
    /// Electricity usage (kWh/day)
    pub electricity_kwh: FloatValue,
    /// Transport type for the day's travel
    pub transport_mode: TransportMode,
    /// Distance traveled (km/day)
    pub distance_km: FloatValue,
    /// Water usage (liters/day)
    pub water_liters: FloatValue,
    /// Waste produced (kg/day)
    pub waste_kg: FloatValue,
    /// Meat meals eaten
    pub meat_meals: u32,
    /// Whether the person smokes
    pub smoking: bool,
    /// Plastic items used
    pub plastic_items: u32,
}

impl ActivityInputs {
    /// Check every field against its domain bounds.
    ///
    /// Returns the first violation found, naming the offending field and the
    /// allowed range. Values are rejected rather than clamped so an incorrect
    /// result can never be produced silently.
    pub fn validate(&self) -> FootprintResult<()> {
        check_range("electricity_kwh", self.electricity_kwh, 0.0, 100.0)?;
        check_range("distance_km", self.distance_km, 0.0, 100.0)?;
        check_range("water_liters", self.water_liters, 0.0, 500.0)?;
        check_range("waste_kg", self.waste_kg, 0.0, 10.0)?;
        check_range("meat_meals", self.meat_meals as FloatValue, 0.0, 5.0)?;
        check_range("plastic_items", self.plastic_items as FloatValue, 0.0, 50.0)?;
        Ok(())
    }

    /// Smoking as a 0/1 indicator, as used in the correlation sample.
    pub fn smoking_indicator(&self) -> FloatValue {
        if self.smoking {
            1.0
        } else {
            0.0
        }
    }
}

impl Default for ActivityInputs {
    /// Form defaults: a fairly typical day.
    fn default() -> Self {
        Self {
            electricity_kwh: 10.0,
            transport_mode: TransportMode::Car,
            distance_km: 10.0,
            water_liters: 60.0,
            waste_kg: 1.0,
            meat_meals: 1,
            smoking: false,
            plastic_items: 5,
        }
    }
}

fn check_range(field: &'static str, value: FloatValue, min: f64, max: f64) -> FootprintResult<()> {
    // NaN compares false against both bounds and is rejected here too
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(FootprintError::OutOfBounds {
            field,
            value,
            min,
            max,
        })
    }
}
