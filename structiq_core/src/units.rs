//! # Stress Units
//!
//! The closed set of stress units the material converter understands,
//! with fixed conversion factors to a common base (MPa).
//!
//! ## Design Philosophy
//!
//! We use a closed enum with an exhaustive factor table rather than a full
//! units library because:
//! - The converter exposes a small, fixed unit set
//! - Adding a unit should be a compile-time-checked extension point
//! - We want JSON serialization to be clean (a tagged magnitude)
//!
//! ## Example
//!
//! ```rust
//! use structiq_core::units::{convert_stress, StressUnit, UnitValue};
//!
//! let mpa = convert_stress(145.038, StressUnit::Psi, StressUnit::Mpa).unwrap();
//! assert!((mpa - 1.0).abs() < 1e-9);
//!
//! let stress = UnitValue::new(345.0, StressUnit::Mpa);
//! let ksi = stress.convert_to(StressUnit::Ksi).unwrap();
//! assert!((ksi.magnitude - 50.03811).abs() < 1e-3);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

// ============================================================================
// Stress Unit Enumeration
// ============================================================================

/// Stress units supported by the converter.
///
/// Every unit carries a fixed factor relative to the MPa base, so a
/// conversion is `value / factor(from) * factor(to)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StressUnit {
    /// Megapascal (base unit)
    #[default]
    Mpa,
    /// Pounds per square inch
    Psi,
    /// Kips per square inch
    Ksi,
    /// Kilopascal
    Kpa,
    /// Kilogram-force per square centimetre
    KgPerCm2,
}

impl StressUnit {
    /// All supported units, in display order
    pub const ALL: [StressUnit; 5] = [
        StressUnit::Mpa,
        StressUnit::Psi,
        StressUnit::Ksi,
        StressUnit::Kpa,
        StressUnit::KgPerCm2,
    ];

    /// Conversion factor from the MPa base (units per 1 MPa)
    pub fn factor(&self) -> f64 {
        match self {
            StressUnit::Mpa => 1.0,
            StressUnit::Psi => 145.038,
            StressUnit::Ksi => 0.145038,
            StressUnit::Kpa => 1000.0,
            StressUnit::KgPerCm2 => 10.1972,
        }
    }

    /// Short symbol for labels and reports
    pub fn symbol(&self) -> &'static str {
        match self {
            StressUnit::Mpa => "MPa",
            StressUnit::Psi => "psi",
            StressUnit::Ksi => "ksi",
            StressUnit::Kpa => "kPa",
            StressUnit::KgPerCm2 => "kg/cm²",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            StressUnit::Mpa => "Megapascal (MPa)",
            StressUnit::Psi => "Pounds per square inch (psi)",
            StressUnit::Ksi => "Kips per square inch (ksi)",
            StressUnit::Kpa => "Kilopascal (kPa)",
            StressUnit::KgPerCm2 => "Kilogram-force per sq. centimetre (kg/cm²)",
        }
    }
}

impl fmt::Display for StressUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// ============================================================================
// Conversion
// ============================================================================

/// Convert a stress magnitude between units.
///
/// Fails with `InvalidInput` when the magnitude is NaN or infinite;
/// the factor table itself cannot fail.
pub fn convert_stress(value: f64, from: StressUnit, to: StressUnit) -> CalcResult<f64> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(
            "value",
            value.to_string(),
            "Value to convert must be a finite number",
        ));
    }
    Ok(value / from.factor() * to.factor())
}

// ============================================================================
// Tagged Magnitude
// ============================================================================

/// A stress magnitude tagged with its unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitValue {
    pub magnitude: f64,
    pub unit: StressUnit,
}

impl UnitValue {
    pub fn new(magnitude: f64, unit: StressUnit) -> Self {
        UnitValue { magnitude, unit }
    }

    /// Re-express this value in another unit
    pub fn convert_to(&self, unit: StressUnit) -> CalcResult<UnitValue> {
        let magnitude = convert_stress(self.magnitude, self.unit, unit)?;
        Ok(UnitValue { magnitude, unit })
    }
}

impl fmt::Display for UnitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.magnitude, self.unit.symbol())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_mpa_to_psi() {
        // 1 MPa = 145.038 psi
        let psi = convert_stress(1.0, StressUnit::Mpa, StressUnit::Psi).unwrap();
        assert_relative_eq!(psi, 145.038, max_relative = 1e-12);
    }

    #[test]
    fn test_kpa_to_ksi() {
        // 1000 kPa = 1 MPa = 0.145038 ksi
        let ksi = convert_stress(1000.0, StressUnit::Kpa, StressUnit::Ksi).unwrap();
        assert_relative_eq!(ksi, 0.145038, max_relative = 1e-12);
    }

    #[test]
    fn test_round_trip_all_pairs() {
        let value = 345.0;
        for from in StressUnit::ALL {
            for to in StressUnit::ALL {
                let there = convert_stress(value, from, to).unwrap();
                let back = convert_stress(there, to, from).unwrap();
                assert_relative_eq!(back, value, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn test_identity_conversion() {
        let same = convert_stress(42.0, StressUnit::KgPerCm2, StressUnit::KgPerCm2).unwrap();
        assert_relative_eq!(same, 42.0, max_relative = 1e-15);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(convert_stress(f64::NAN, StressUnit::Mpa, StressUnit::Psi).is_err());
        assert!(convert_stress(f64::INFINITY, StressUnit::Psi, StressUnit::Mpa).is_err());

        let err = convert_stress(f64::NAN, StressUnit::Mpa, StressUnit::Psi).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_unit_value_convert() {
        let a36_yield = UnitValue::new(250.0, StressUnit::Mpa);
        let in_psi = a36_yield.convert_to(StressUnit::Psi).unwrap();
        // 250 MPa * 145.038 = 36259.5 psi
        assert_relative_eq!(in_psi.magnitude, 36259.5, max_relative = 1e-12);
        assert_eq!(in_psi.unit, StressUnit::Psi);
    }

    #[test]
    fn test_serialization() {
        let value = UnitValue::new(25.0, StressUnit::Mpa);
        let json = serde_json::to_string(&value).unwrap();
        let roundtrip: UnitValue = serde_json::from_str(&json).unwrap();
        assert_eq!(value, roundtrip);
    }
}
