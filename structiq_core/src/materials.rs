//! # Materials Reference
//!
//! A small reference table of common structural materials the converter
//! screen displays next to the unit converter. These are typical nominal
//! values, not a full design-value database.
//!
//! ## Example
//!
//! ```rust
//! use structiq_core::materials;
//! use structiq_core::units::StressUnit;
//!
//! let a36 = materials::get("Structural Steel (A36)").unwrap();
//! assert_eq!(a36.strength_mpa, 250.0);
//!
//! let in_psi = a36.strength().convert_to(StressUnit::Psi).unwrap();
//! assert!(in_psi.magnitude > 36_000.0);
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::errors::{CalcError, CalcResult};
use crate::units::{StressUnit, UnitValue};

/// Broad material family, used for labeling only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MaterialCategory {
    Steel,
    Concrete,
    Aluminum,
}

impl MaterialCategory {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            MaterialCategory::Steel => "Steel",
            MaterialCategory::Concrete => "Concrete",
            MaterialCategory::Aluminum => "Aluminum",
        }
    }
}

/// Nominal properties of a common structural material.
///
/// `strength_mpa` is the yield strength for metals and the characteristic
/// compressive strength for concrete grades.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MaterialProperties {
    pub name: &'static str,
    pub category: MaterialCategory,
    pub strength_mpa: f64,
    pub elastic_modulus_gpa: f64,
}

impl MaterialProperties {
    /// Strength as a unit-tagged value (MPa base), ready for conversion
    pub fn strength(&self) -> UnitValue {
        UnitValue::new(self.strength_mpa, StressUnit::Mpa)
    }
}

/// The reference table, in display order
pub const COMMON_MATERIALS: [MaterialProperties; 5] = [
    MaterialProperties {
        name: "Structural Steel (A36)",
        category: MaterialCategory::Steel,
        strength_mpa: 250.0,
        elastic_modulus_gpa: 200.0,
    },
    MaterialProperties {
        name: "High-Strength Steel (A992)",
        category: MaterialCategory::Steel,
        strength_mpa: 345.0,
        elastic_modulus_gpa: 200.0,
    },
    MaterialProperties {
        name: "Concrete (M25)",
        category: MaterialCategory::Concrete,
        strength_mpa: 25.0,
        elastic_modulus_gpa: 25.0,
    },
    MaterialProperties {
        name: "Concrete (M30)",
        category: MaterialCategory::Concrete,
        strength_mpa: 30.0,
        elastic_modulus_gpa: 27.0,
    },
    MaterialProperties {
        name: "Aluminum (6061-T6)",
        category: MaterialCategory::Aluminum,
        strength_mpa: 240.0,
        elastic_modulus_gpa: 70.0,
    },
];

/// Case-insensitive name index over `COMMON_MATERIALS`
static BY_NAME: Lazy<HashMap<String, &'static MaterialProperties>> = Lazy::new(|| {
    COMMON_MATERIALS
        .iter()
        .map(|mat| (mat.name.to_ascii_lowercase(), mat))
        .collect()
});

/// Look up a material by name (case-insensitive)
pub fn find(name: &str) -> Option<&'static MaterialProperties> {
    BY_NAME.get(&name.to_ascii_lowercase()).copied()
}

/// Look up a material by name, failing with `MaterialNotFound`
pub fn get(name: &str) -> CalcResult<&'static MaterialProperties> {
    find(name).ok_or_else(|| CalcError::material_not_found(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_contents() {
        assert_eq!(COMMON_MATERIALS.len(), 5);

        let a992 = &COMMON_MATERIALS[1];
        assert_eq!(a992.name, "High-Strength Steel (A992)");
        assert_eq!(a992.strength_mpa, 345.0);
        assert_eq!(a992.elastic_modulus_gpa, 200.0);

        let m30 = &COMMON_MATERIALS[3];
        assert_eq!(m30.category, MaterialCategory::Concrete);
        assert_eq!(m30.elastic_modulus_gpa, 27.0);
    }

    #[test]
    fn test_find_case_insensitive() {
        let hit = find("structural steel (a36)").unwrap();
        assert_eq!(hit.strength_mpa, 250.0);
        assert!(find("Unobtainium").is_none());
    }

    #[test]
    fn test_get_error() {
        let err = get("Unobtainium").unwrap_err();
        assert_eq!(err.error_code(), "MATERIAL_NOT_FOUND");
    }

    #[test]
    fn test_strength_conversion() {
        let aluminum = get("Aluminum (6061-T6)").unwrap();
        let ksi = aluminum.strength().convert_to(StressUnit::Ksi).unwrap();
        // 240 MPa * 0.145038 = 34.809 ksi
        assert!((ksi.magnitude - 34.80912).abs() < 1e-9);
    }
}
