//! # Seismic Design Factors
//!
//! Factor lookups for the simplified equivalent static procedure per
//! IS 1893 (Part 1): 2016.
//!
//! ## Overview
//!
//! The design horizontal seismic coefficient combines four factors:
//!
//! ```text
//! Ah = Z × I × (Sa/g) / (2 × R)
//! V  = Ah × W
//! ```
//!
//! ## Factor Summary
//!
//! | Factor | Description                      | Values        |
//! |--------|----------------------------------|---------------|
//! | Z      | Seismic zone factor              | 0.10 - 0.36   |
//! | I      | Importance factor                | 1.0 - 1.5     |
//! | R      | Response reduction factor        | 3.0 - 5.0     |
//! | Sa/g   | Spectral acceleration coefficient| Piecewise in T |
//!
//! ## Reference
//!
//! IS 1893 (Part 1): 2016, Clause 6.4: Design Spectrum

use serde::{Deserialize, Serialize};

// ============================================================================
// IS 1893 Code Section References
// ============================================================================

/// IS 1893 code section references for seismic design factors.
///
/// These constants provide traceable references to IS 1893 (Part 1): 2016,
/// Criteria for Earthquake Resistant Design of Structures.
pub mod seismic_ref {
    // Factors
    /// Seismic zone factor Z
    pub const ZONE_FACTOR: &str = "IS 1893-1:2016 Table 3";
    /// Importance factor I
    pub const IMPORTANCE_FACTOR: &str = "IS 1893-1:2016 Table 8";
    /// Response reduction factor R
    pub const RESPONSE_REDUCTION: &str = "IS 1893-1:2016 Table 9";
    /// Design response spectrum Sa/g
    pub const SPECTRAL_ACCELERATION: &str = "IS 1893-1:2016 Cl. 6.4.2";

    // Procedure
    /// Design horizontal seismic coefficient Ah
    pub const DESIGN_COEFFICIENT: &str = "IS 1893-1:2016 Cl. 6.4.2";
    /// Design base shear V = Ah × W
    pub const BASE_SHEAR: &str = "IS 1893-1:2016 Cl. 7.2.1";
    /// Vertical distribution of base shear
    pub const VERTICAL_DISTRIBUTION: &str = "IS 1893-1:2016 Cl. 7.6.3";
    /// Approximate fundamental period of moment frames
    pub const FUNDAMENTAL_PERIOD: &str = "IS 1893-1:2016 Cl. 7.6.2";
}

/// Seismic zone factor (Z) per IS 1893 Table 3
///
/// Zones are numbered II through V with increasing expected ground
/// acceleration; zone I was merged into zone II decades ago.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SeismicZone {
    /// Zone II, low seismicity: Z = 0.10
    Zone2,

    /// Zone III, moderate seismicity: Z = 0.16
    #[default]
    Zone3,

    /// Zone IV, severe seismicity: Z = 0.24
    Zone4,

    /// Zone V, very severe seismicity: Z = 0.36
    Zone5,
}

impl SeismicZone {
    /// All zone variants for UI selection
    pub const ALL: [SeismicZone; 4] = [
        SeismicZone::Zone2,
        SeismicZone::Zone3,
        SeismicZone::Zone4,
        SeismicZone::Zone5,
    ];

    /// Get the zone factor Z
    pub fn factor(&self) -> f64 {
        match self {
            SeismicZone::Zone2 => 0.10,
            SeismicZone::Zone3 => 0.16,
            SeismicZone::Zone4 => 0.24,
            SeismicZone::Zone5 => 0.36,
        }
    }

    /// Numeric zone label (2-5)
    pub fn zone_number(&self) -> u8 {
        match self {
            SeismicZone::Zone2 => 2,
            SeismicZone::Zone3 => 3,
            SeismicZone::Zone4 => 4,
            SeismicZone::Zone5 => 5,
        }
    }

    /// Map a numeric zone label (2-5) back to a zone
    pub fn from_zone_number(zone: u8) -> Option<SeismicZone> {
        match zone {
            2 => Some(SeismicZone::Zone2),
            3 => Some(SeismicZone::Zone3),
            4 => Some(SeismicZone::Zone4),
            5 => Some(SeismicZone::Zone5),
            _ => None,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            SeismicZone::Zone2 => "Zone II (Low)",
            SeismicZone::Zone3 => "Zone III (Moderate)",
            SeismicZone::Zone4 => "Zone IV (Severe)",
            SeismicZone::Zone5 => "Zone V (Very Severe)",
        }
    }
}

impl std::fmt::Display for SeismicZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Soil/site class for the design response spectrum
///
/// Selects which plateau and decay branch of the Sa/g spectrum applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SoilType {
    /// Type I, rock or hard soil: plateau to 0.40 s, decay 1.00/T
    TypeI,

    /// Type II, medium stiff soil: plateau to 0.55 s, decay 1.36/T
    #[default]
    TypeII,

    /// Type III, soft soil: plateau to 0.67 s, decay 1.67/T
    TypeIII,
}

impl SoilType {
    /// All soil variants for UI selection
    pub const ALL: [SoilType; 3] = [SoilType::TypeI, SoilType::TypeII, SoilType::TypeIII];

    /// Spectral acceleration coefficient Sa/g at 5% damping.
    ///
    /// Piecewise in the fundamental period T (seconds): a linear ramp
    /// 1 + 15T up to 0.1 s, a plateau at 2.5, a soil-dependent 1/T decay
    /// to 4.0 s, and a constant floor beyond.
    pub fn spectral_acceleration(&self, period_s: f64) -> f64 {
        if period_s <= 0.1 {
            return 1.0 + 15.0 * period_s;
        }
        match self {
            SoilType::TypeI => {
                if period_s <= 0.4 {
                    2.5
                } else if period_s <= 4.0 {
                    1.0 / period_s
                } else {
                    0.25
                }
            }
            SoilType::TypeII => {
                if period_s <= 0.55 {
                    2.5
                } else if period_s <= 4.0 {
                    1.36 / period_s
                } else {
                    0.34
                }
            }
            SoilType::TypeIII => {
                if period_s <= 0.67 {
                    2.5
                } else if period_s <= 4.0 {
                    1.67 / period_s
                } else {
                    0.42
                }
            }
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            SoilType::TypeI => "Type I (Rock/Hard Soil)",
            SoilType::TypeII => "Type II (Medium Stiff Soil)",
            SoilType::TypeIII => "Type III (Soft Soil)",
        }
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Occupancy category for the importance factor (I) per IS 1893 Table 8
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OccupancyCategory {
    /// Ordinary residential buildings: I = 1.0
    #[default]
    Residential,

    /// Ordinary commercial buildings: I = 1.0
    Commercial,

    /// Industrial buildings with higher occupancy: I = 1.2
    Industrial,

    /// Important/critical facilities (hospitals, schools): I = 1.5
    Important,
}

impl OccupancyCategory {
    /// All occupancy variants for UI selection
    pub const ALL: [OccupancyCategory; 4] = [
        OccupancyCategory::Residential,
        OccupancyCategory::Commercial,
        OccupancyCategory::Industrial,
        OccupancyCategory::Important,
    ];

    /// Get the importance factor I
    pub fn factor(&self) -> f64 {
        match self {
            OccupancyCategory::Residential => 1.0,
            OccupancyCategory::Commercial => 1.0,
            OccupancyCategory::Industrial => 1.2,
            OccupancyCategory::Important => 1.5,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            OccupancyCategory::Residential => "Residential (1.0)",
            OccupancyCategory::Commercial => "Commercial (1.0)",
            OccupancyCategory::Industrial => "Industrial (1.2)",
            OccupancyCategory::Important => "Important/Critical (1.5)",
        }
    }
}

impl std::fmt::Display for OccupancyCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Ductility class for the response reduction factor (R) per IS 1893 Table 9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DuctilityClass {
    /// Ordinary moment-resisting frame: R = 3.0
    #[default]
    Ordinary,

    /// Special moment-resisting frame: R = 4.0
    Special,

    /// Ductile frame with detailing per IS 13920: R = 5.0
    Ductile,
}

impl DuctilityClass {
    /// All ductility variants for UI selection
    pub const ALL: [DuctilityClass; 3] = [
        DuctilityClass::Ordinary,
        DuctilityClass::Special,
        DuctilityClass::Ductile,
    ];

    /// Get the response reduction factor R
    pub fn factor(&self) -> f64 {
        match self {
            DuctilityClass::Ordinary => 3.0,
            DuctilityClass::Special => 4.0,
            DuctilityClass::Ductile => 5.0,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            DuctilityClass::Ordinary => "Ordinary Frame (R=3.0)",
            DuctilityClass::Special => "Special Frame (R=4.0)",
            DuctilityClass::Ductile => "Ductile Frame (R=5.0)",
        }
    }
}

impl std::fmt::Display for DuctilityClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
