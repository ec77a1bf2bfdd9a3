//! End-to-end scenarios for the footprint calculator.
//!
//! Each scenario pins the exact component values for a fully specified day
//! of activities, using the default factor table.

use approx::assert_relative_eq;
use footprint_core::{ActivityInputs, FootprintCalculator, TransportMode};

fn zero_day() -> ActivityInputs {
    ActivityInputs {
        electricity_kwh: 0.0,
        transport_mode: TransportMode::Walk,
        distance_km: 0.0,
        water_liters: 0.0,
        waste_kg: 0.0,
        meat_meals: 0,
        smoking: false,
        plastic_items: 0,
    }
}

/// A fairly typical day: 10 kWh, 10 km by car, 60 L of water, 1 kg of
/// waste, one meat meal, five plastic items, non-smoker.
#[test]
fn test_typical_day() {
    let calculator = FootprintCalculator::new();
    let inputs = ActivityInputs::default();
    inputs.validate().unwrap();

    let footprint = calculator.calculate(&inputs);

    assert_relative_eq!(footprint.transport, 2.10);
    assert_relative_eq!(footprint.electricity, 4.75);
    assert_relative_eq!(footprint.waste, 2.00);
    assert_relative_eq!(footprint.meat, 5.00);
    assert_relative_eq!(footprint.smoking, 0.00);
    assert_relative_eq!(footprint.plastic, 0.50);
    assert_relative_eq!(footprint.total_carbon, 14.35);
    assert_relative_eq!(footprint.total_water, 60.00);
}

/// All inputs at zero, walking: every component is zero.
#[test]
fn test_zero_day() {
    let calculator = FootprintCalculator::new();
    let footprint = calculator.calculate(&zero_day());

    for (component, value) in footprint.components() {
        assert_eq!(value, 0.0, "{} should be zero on a zero day", component);
    }
    assert_eq!(footprint.total_carbon, 0.0);
    assert_eq!(footprint.total_water, 0.0);
}

/// Smoking with everything else at zero: the flat charge alone.
#[test]
fn test_smoking_only() {
    let calculator = FootprintCalculator::new();
    let inputs = ActivityInputs {
        smoking: true,
        ..zero_day()
    };

    let footprint = calculator.calculate(&inputs);

    assert_relative_eq!(footprint.smoking, 0.50);
    assert_relative_eq!(footprint.total_carbon, 0.50);
}

/// 20 km by bus with everything else at zero.
#[test]
fn test_bus_commute_only() {
    let calculator = FootprintCalculator::new();
    let inputs = ActivityInputs {
        transport_mode: TransportMode::Bus,
        distance_km: 20.0,
        ..zero_day()
    };

    let footprint = calculator.calculate(&inputs);

    assert_relative_eq!(footprint.transport, 1.00);
    assert_relative_eq!(footprint.total_carbon, 1.00);
}

/// An unknown transport mode string fails at the parsing boundary, before
/// any calculation can produce partial output.
#[test]
fn test_unknown_transport_mode_string() {
    let result = "Teleport".parse::<TransportMode>();
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Teleport"));
}

/// Human-powered transport carries no carbon regardless of distance.
#[test]
fn test_human_powered_transport_is_free() {
    let calculator = FootprintCalculator::new();

    for mode in [TransportMode::Bicycle, TransportMode::Walk] {
        let inputs = ActivityInputs {
            transport_mode: mode,
            distance_km: 100.0,
            ..zero_day()
        };
        let footprint = calculator.calculate(&inputs);
        assert_eq!(footprint.transport, 0.0);
        assert_eq!(footprint.total_carbon, 0.0);
    }
}
