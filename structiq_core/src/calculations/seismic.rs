//! # Seismic Load Calculator
//!
//! Simplified equivalent-static seismic design per IS 1893 (Part 1):2016:
//! design coefficient, base shear, vertical force distribution, and the
//! design response spectrum for charting.
//!
//! ## Method
//!
//! - A_h = Z · I · (Sa/g) / (2 · R)
//! - V = A_h · W
//! - F_i = V · w_i·h_i^k / Σ(w_j·h_j^k), with k = 2 when T > 0.5 s else 1
//!
//! Floors are taken as equally spaced with equal seismic weight
//! W / floor count, which is the usual idealization for regular frames.
//!
//! ## Example
//!
//! ```rust
//! use structiq_core::calculations::seismic::{calculate, SeismicInput};
//! use structiq_core::seismic_factors::{
//!     DuctilityClass, OccupancyCategory, SeismicZone, SoilType,
//! };
//!
//! let input = SeismicInput {
//!     zone: SeismicZone::Zone3,
//!     soil_type: SoilType::TypeII,
//!     occupancy: OccupancyCategory::Residential,
//!     ductility: DuctilityClass::Ordinary,
//!     height_m: 15.0,
//!     floor_count: 5,
//!     total_weight_kn: 5000.0,
//!     fundamental_period_s: 0.6,
//! };
//!
//! let result = calculate(&input).unwrap();
//! // Sa/g = 1.36/0.6, A_h = 0.16·1.0·2.2667/(2·3.0) = 0.06044
//! assert!((result.design_coefficient - 0.060444).abs() < 1e-5);
//! assert!((result.base_shear_kn - 302.222).abs() < 1e-2);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::seismic_factors::{DuctilityClass, OccupancyCategory, SeismicZone, SoilType};

/// Number of 0.1 s steps in the charted response spectrum (0 to 4.0 s).
const SPECTRUM_SAMPLES: usize = 40;

/// Input parameters for the seismic load calculator.
///
/// ## JSON Example
///
/// ```json
/// {
///   "zone": "Zone3",
///   "soil_type": "TypeII",
///   "occupancy": "Residential",
///   "ductility": "Ordinary",
///   "height_m": 15.0,
///   "floor_count": 5,
///   "total_weight_kn": 5000.0,
///   "fundamental_period_s": 0.6
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeismicInput {
    /// Seismic zone (II to V)
    pub zone: SeismicZone,

    /// Foundation soil classification
    pub soil_type: SoilType,

    /// Building use category setting the importance factor
    pub occupancy: OccupancyCategory,

    /// Lateral system ductility class setting the response reduction factor
    pub ductility: DuctilityClass,

    /// Total building height above the base in metres
    pub height_m: f64,

    /// Number of floors (≥ 1), assumed equally spaced over the height
    pub floor_count: u32,

    /// Total seismic weight W in kN, split equally between floors
    pub total_weight_kn: f64,

    /// Fundamental natural period T in seconds
    pub fundamental_period_s: f64,
}

impl SeismicInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.height_m.is_finite() || self.height_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "height_m",
                self.height_m.to_string(),
                "Building height must be a positive, finite number",
            ));
        }
        if self.floor_count < 1 {
            return Err(CalcError::invalid_input(
                "floor_count",
                self.floor_count.to_string(),
                "Floor count must be at least 1",
            ));
        }
        if !self.total_weight_kn.is_finite() || self.total_weight_kn <= 0.0 {
            return Err(CalcError::invalid_input(
                "total_weight_kn",
                self.total_weight_kn.to_string(),
                "Seismic weight must be a positive, finite number",
            ));
        }
        if !self.fundamental_period_s.is_finite() || self.fundamental_period_s < 0.0 {
            return Err(CalcError::invalid_input(
                "fundamental_period_s",
                self.fundamental_period_s.to_string(),
                "Fundamental period must be a non-negative, finite number",
            ));
        }
        Ok(())
    }
}

/// Lateral force assigned to one floor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloorForce {
    /// Floor number, 1 at the lowest suspended floor
    pub floor: u32,

    /// Floor height above the base (m)
    pub height_m: f64,

    /// Seismic weight lumped at this floor (kN)
    pub weight_kn: f64,

    /// Design lateral force at this floor (kN)
    pub force_kn: f64,
}

/// One point of the design response spectrum
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectrumPoint {
    /// Natural period (s)
    pub period_s: f64,

    /// Spectral acceleration coefficient Sa/g
    pub sa: f64,
}

/// Results from the seismic load calculator.
///
/// ## JSON Example (sequences truncated)
///
/// ```json
/// {
///   "base_shear_kn": 302.22,
///   "zone_factor": 0.16,
///   "importance_factor": 1.0,
///   "response_reduction_factor": 3.0,
///   "spectral_acceleration_coefficient": 2.27,
///   "design_coefficient": 0.0604,
///   "floor_forces": [
///     { "floor": 1, "height_m": 3.0, "weight_kn": 1000.0, "force_kn": 5.49 }
///   ],
///   "spectrum_curve": [
///     { "period_s": 0.0, "sa": 1.0 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeismicResult {
    // === Design Base Shear ===
    /// Design base shear V = A_h · W (kN)
    pub base_shear_kn: f64,

    // === Factors ===
    /// Zone factor Z
    pub zone_factor: f64,

    /// Importance factor I
    pub importance_factor: f64,

    /// Response reduction factor R
    pub response_reduction_factor: f64,

    /// Spectral acceleration coefficient Sa/g at the input period
    pub spectral_acceleration_coefficient: f64,

    /// Design horizontal seismic coefficient A_h = Z·I·(Sa/g)/(2R)
    pub design_coefficient: f64,

    // === Distribution & Spectrum ===
    /// Lateral force per floor, bottom to top; sums to the base shear
    pub floor_forces: Vec<FloorForce>,

    /// Sa/g sampled at 0, 0.1, ..., 4.0 s for charting
    pub spectrum_curve: Vec<SpectrumPoint>,
}

/// Empirical fundamental period for an RC frame building:
/// T = 0.09·h/√d, with h the height and d the base dimension along the
/// considered direction of shaking (both in metres).
///
/// # Arguments
///
/// * `height_m` - Building height above the base (m)
/// * `base_dimension_m` - Plan dimension along the shaking direction (m)
pub fn estimate_fundamental_period(height_m: f64, base_dimension_m: f64) -> CalcResult<f64> {
    if !height_m.is_finite() || height_m <= 0.0 {
        return Err(CalcError::invalid_input(
            "height_m",
            height_m.to_string(),
            "Building height must be a positive, finite number",
        ));
    }
    if !base_dimension_m.is_finite() || base_dimension_m <= 0.0 {
        return Err(CalcError::invalid_input(
            "base_dimension_m",
            base_dimension_m.to_string(),
            "Base dimension must be a positive, finite number",
        ));
    }
    Ok(0.09 * height_m / base_dimension_m.sqrt())
}

/// Calculate the design base shear, its vertical distribution, and the
/// response spectrum for the given building.
///
/// # Arguments
///
/// * `input` - Zone, soil, occupancy, ductility, and building parameters
///
/// # Returns
///
/// * `Ok(SeismicResult)` - Base shear, factors, floor forces, spectrum
/// * `Err(CalcError)` - Structured error if inputs are invalid
pub fn calculate(input: &SeismicInput) -> CalcResult<SeismicResult> {
    input.validate()?;

    let zone_factor = input.zone.factor();
    let importance_factor = input.occupancy.factor();
    let response_reduction_factor = input.ductility.factor();
    let sa = input.soil_type.spectral_acceleration(input.fundamental_period_s);

    // A_h = Z · I · (Sa/g) / (2R)
    let design_coefficient = zone_factor * importance_factor * sa / (2.0 * response_reduction_factor);

    // V = A_h · W
    let base_shear_kn = design_coefficient * input.total_weight_kn;

    // F_i = V · w_i·h_i^k / Σ(w_j·h_j^k); k = 2 for flexible buildings
    let exponent: i32 = if input.fundamental_period_s > 0.5 { 2 } else { 1 };
    let floors = input.floor_count as f64;
    let storey_height_m = input.height_m / floors;
    let floor_weight_kn = input.total_weight_kn / floors;

    let weighted_heights: Vec<f64> = (1..=input.floor_count)
        .map(|floor| {
            let height_m = storey_height_m * floor as f64;
            floor_weight_kn * height_m.powi(exponent)
        })
        .collect();
    let total_weighted: f64 = weighted_heights.iter().sum();

    let floor_forces: Vec<FloorForce> = weighted_heights
        .iter()
        .enumerate()
        .map(|(index, weighted)| {
            let floor = index as u32 + 1;
            FloorForce {
                floor,
                height_m: storey_height_m * floor as f64,
                weight_kn: floor_weight_kn,
                force_kn: base_shear_kn * weighted / total_weighted,
            }
        })
        .collect();

    let spectrum_curve: Vec<SpectrumPoint> = (0..=SPECTRUM_SAMPLES)
        .map(|i| {
            let period_s = i as f64 / 10.0;
            SpectrumPoint {
                period_s,
                sa: input.soil_type.spectral_acceleration(period_s),
            }
        })
        .collect();

    Ok(SeismicResult {
        base_shear_kn,
        zone_factor,
        importance_factor,
        response_reduction_factor,
        spectral_acceleration_coefficient: sa,
        design_coefficient,
        floor_forces,
        spectrum_curve,
    })
}
