//! # Slab Design Tool
//!
//! Single-span simplified ultimate-limit-state design of one-way and
//! two-way concrete slabs: design moment on a 1 m strip, lever arm and
//! required steel area, bar spacings, and bending/shear/thickness checks,
//! plus moment and deflection shapes for charting.
//!
//! ## Method
//!
//! - M = c · (dead + live) · span², c = 0.125 one-way / 0.086 two-way,
//!   span = max(length, width)
//! - d = thickness − cover − main bar diameter / 2
//! - k = M·10⁶ / (d² · fck), z = min(0.95d, 0.95d·(0.5 + √(0.25 − 0.882k)))
//! - As = M·10⁶ / (0.87 · fy · z) with fy = 500 MPa
//! - spacing = min(1000 · bar area / As, 250 mm), distribution steel
//!   sized for 20% (one-way) or 80% (two-way) of the main steel area
//!
//! A negative value under the lever-arm square root means the section
//! cannot work singly reinforced at this moment; that is reported as a
//! math domain error rather than propagated as NaN.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Steel yield strength assumed for reinforcement (MPa)
const STEEL_YIELD_MPA: f64 = 500.0;

/// Widest permitted bar spacing (mm)
const MAX_BAR_SPACING_MM: f64 = 250.0;

/// Number of equal intervals in the charted moment/deflection shapes.
const CURVE_SAMPLES: usize = 20;

/// Load-carrying behavior of the slab panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SlabType {
    /// Spans in one direction; distribution steel at 20% of main steel
    #[default]
    OneWay,

    /// Spans in both directions; secondary direction carries 80%
    TwoWay,
}

impl SlabType {
    /// All slab variants for UI selection
    pub const ALL: [SlabType; 2] = [SlabType::OneWay, SlabType::TwoWay];

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            SlabType::OneWay => "One-Way Slab",
            SlabType::TwoWay => "Two-Way Slab",
        }
    }

    /// Simplified midspan moment coefficient c in M = c·w·L²
    pub fn moment_coefficient(&self) -> f64 {
        match self {
            SlabType::OneWay => 0.125,
            SlabType::TwoWay => 0.086,
        }
    }

    /// Span-to-thickness denominator for the minimum thickness check
    pub fn min_thickness_divisor(&self) -> f64 {
        match self {
            SlabType::OneWay => 28.0,
            SlabType::TwoWay => 32.0,
        }
    }

    /// Distribution steel area as a fraction of the main steel area
    pub fn distribution_steel_fraction(&self) -> f64 {
        match self {
            SlabType::OneWay => 0.2,
            SlabType::TwoWay => 0.8,
        }
    }
}

impl std::fmt::Display for SlabType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Input parameters for the slab design tool.
///
/// ## JSON Example
///
/// ```json
/// {
///   "slab_type": "OneWay",
///   "length_m": 4.0,
///   "width_m": 3.0,
///   "thickness_mm": 150.0,
///   "concrete_grade_mpa": 25.0,
///   "dead_load_kpa": 1.5,
///   "live_load_kpa": 2.5,
///   "main_bar_diameter_mm": 10.0,
///   "distribution_bar_diameter_mm": 8.0,
///   "cover_mm": 25.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlabInput {
    /// One-way or two-way behavior
    pub slab_type: SlabType,

    /// Panel length in metres
    pub length_m: f64,

    /// Panel width in metres
    pub width_m: f64,

    /// Overall slab thickness in mm
    pub thickness_mm: f64,

    /// Characteristic concrete compressive strength fck in MPa
    pub concrete_grade_mpa: f64,

    /// Superimposed dead load in kPa (kN/m²)
    pub dead_load_kpa: f64,

    /// Live load in kPa (kN/m²)
    pub live_load_kpa: f64,

    /// Main reinforcement bar diameter in mm
    pub main_bar_diameter_mm: f64,

    /// Distribution reinforcement bar diameter in mm
    pub distribution_bar_diameter_mm: f64,

    /// Clear concrete cover to the main bars in mm
    pub cover_mm: f64,
}

impl SlabInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.length_m.is_finite() || self.length_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "length_m",
                self.length_m.to_string(),
                "Panel length must be a positive, finite number",
            ));
        }
        if !self.width_m.is_finite() || self.width_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "width_m",
                self.width_m.to_string(),
                "Panel width must be a positive, finite number",
            ));
        }
        if !self.thickness_mm.is_finite() || self.thickness_mm <= 0.0 {
            return Err(CalcError::invalid_input(
                "thickness_mm",
                self.thickness_mm.to_string(),
                "Thickness must be a positive, finite number",
            ));
        }
        if !self.concrete_grade_mpa.is_finite() || self.concrete_grade_mpa <= 0.0 {
            return Err(CalcError::invalid_input(
                "concrete_grade_mpa",
                self.concrete_grade_mpa.to_string(),
                "Concrete grade must be a positive, finite number",
            ));
        }
        if !self.dead_load_kpa.is_finite() || self.dead_load_kpa < 0.0 {
            return Err(CalcError::invalid_input(
                "dead_load_kpa",
                self.dead_load_kpa.to_string(),
                "Dead load must be a non-negative, finite number",
            ));
        }
        if !self.live_load_kpa.is_finite() || self.live_load_kpa < 0.0 {
            return Err(CalcError::invalid_input(
                "live_load_kpa",
                self.live_load_kpa.to_string(),
                "Live load must be a non-negative, finite number",
            ));
        }
        if !self.main_bar_diameter_mm.is_finite() || self.main_bar_diameter_mm <= 0.0 {
            return Err(CalcError::invalid_input(
                "main_bar_diameter_mm",
                self.main_bar_diameter_mm.to_string(),
                "Main bar diameter must be a positive, finite number",
            ));
        }
        if !self.distribution_bar_diameter_mm.is_finite() || self.distribution_bar_diameter_mm <= 0.0
        {
            return Err(CalcError::invalid_input(
                "distribution_bar_diameter_mm",
                self.distribution_bar_diameter_mm.to_string(),
                "Distribution bar diameter must be a positive, finite number",
            ));
        }
        if !self.cover_mm.is_finite() || self.cover_mm < 0.0 {
            return Err(CalcError::invalid_input(
                "cover_mm",
                self.cover_mm.to_string(),
                "Cover must be a non-negative, finite number",
            ));
        }
        if self.effective_depth_mm() <= 0.0 {
            return Err(CalcError::invalid_input(
                "thickness_mm",
                self.thickness_mm.to_string(),
                "Thickness must exceed cover plus half the main bar diameter",
            ));
        }
        Ok(())
    }

    /// d = thickness − cover − main bar diameter / 2 (mm)
    pub fn effective_depth_mm(&self) -> f64 {
        self.thickness_mm - self.cover_mm - self.main_bar_diameter_mm / 2.0
    }
}

/// One pass/fail design check with the compared values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlabCheck {
    /// Check name, e.g. "Bending Moment"
    pub name: String,

    /// True when the demand is within the limit
    pub passes: bool,

    /// Demand-side value being checked
    pub actual_value: f64,

    /// Capacity or limit the demand is compared against
    pub limit_value: f64,

    /// Unit shared by actual and limit
    pub unit: String,
}

/// One point of the charted moment shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlabMomentPoint {
    /// Distance along the charted span (m)
    pub position_m: f64,

    /// Strip moment at this station (kNm/m)
    pub moment_knm_per_m: f64,
}

/// One point of the charted deflection shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlabDeflectionPoint {
    /// Distance along the charted span (m)
    pub position_m: f64,

    /// Indicative deflection at this station (mm)
    pub deflection_mm: f64,
}

/// Results from the slab design tool.
///
/// ## JSON Example (sequences truncated)
///
/// ```json
/// {
///   "effective_depth_mm": 120.0,
///   "max_moment_knm_per_m": 0.025,
///   "required_steel_area_mm2_per_m": 0.54,
///   "main_bar_spacing_mm": 250.0,
///   "distribution_bar_spacing_mm": 250.0,
///   "checks": [
///     {
///       "name": "Bending Moment",
///       "passes": true,
///       "actual_value": 0.025,
///       "limit_value": 0.060,
///       "unit": "kNm/m"
///     }
///   ],
///   "moment_curve": [{ "position_m": 0.0, "moment_knm_per_m": 0.0 }],
///   "deflection_curve": [{ "position_m": 0.0, "deflection_mm": 0.0 }]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlabResult {
    // === Section ===
    /// Effective depth d (mm)
    pub effective_depth_mm: f64,

    /// Design moment on a 1 m strip (kNm/m)
    pub max_moment_knm_per_m: f64,

    /// Required main steel area (mm²/m)
    pub required_steel_area_mm2_per_m: f64,

    // === Reinforcement ===
    /// Main bar spacing, capped at 250 mm and rounded (mm)
    pub main_bar_spacing_mm: f64,

    /// Distribution bar spacing, capped at 250 mm and rounded (mm)
    pub distribution_bar_spacing_mm: f64,

    // === Checks ===
    /// Bending, shear, and minimum thickness checks in that order
    pub checks: Vec<SlabCheck>,

    // === Curves ===
    /// Moment shape sampled at 21 stations
    pub moment_curve: Vec<SlabMomentPoint>,

    /// Indicative deflection shape sampled at 21 stations
    pub deflection_curve: Vec<SlabDeflectionPoint>,
}

/// Design the slab and evaluate its checks.
///
/// # Arguments
///
/// * `input` - Geometry, materials, loads, and reinforcement sizes
///
/// # Returns
///
/// * `Ok(SlabResult)` - Steel requirements, spacings, checks, curves
/// * `Err(CalcError)` - Invalid input, or a math domain error when the
///   lever-arm square root goes negative (over-stressed section)
pub fn calculate(input: &SlabInput) -> CalcResult<SlabResult> {
    input.validate()?;

    let total_load_kpa = input.dead_load_kpa + input.live_load_kpa;
    let effective_depth = input.effective_depth_mm();
    let governing_span_m = input.length_m.max(input.width_m);
    let fck = input.concrete_grade_mpa;

    // M = c·w·L² on a 1 m strip
    let max_moment = input.slab_type.moment_coefficient() * total_load_kpa * governing_span_m.powi(2);

    // k = M·10⁶ / (d²·fck)
    let k = max_moment * 1.0e6 / (effective_depth.powi(2) * fck);
    let discriminant = 0.25 - 0.882 * k;
    if discriminant < 0.0 {
        return Err(CalcError::domain_math(
            "slab lever arm",
            format!(
                "0.25 - 0.882k is negative (k = {k:.3}); the section cannot be \
                 singly reinforced, increase thickness or concrete grade"
            ),
        ));
    }

    // z = min(0.95d, 0.95d·(0.5 + √(0.25 − 0.882k)))
    let lever_arm = (0.95 * effective_depth).min(0.95 * effective_depth * (0.5 + discriminant.sqrt()));

    // As = M·10⁶ / (0.87·fy·z)
    let required_steel = max_moment * 1.0e6 / (0.87 * STEEL_YIELD_MPA * lever_arm);

    let main_bar_area = std::f64::consts::PI * (input.main_bar_diameter_mm / 2.0).powi(2);
    let dist_bar_area = std::f64::consts::PI * (input.distribution_bar_diameter_mm / 2.0).powi(2);

    let main_spacing = (1000.0 * main_bar_area / required_steel).min(MAX_BAR_SPACING_MM);
    let dist_fraction = input.slab_type.distribution_steel_fraction();
    let dist_spacing =
        (1000.0 * dist_bar_area / (dist_fraction * required_steel)).min(MAX_BAR_SPACING_MM);

    let min_thickness = governing_span_m * 1000.0 / input.slab_type.min_thickness_divisor();

    // Simplified one-way shear at the support on a 1 m strip
    let shear_capacity = 0.25 * fck.sqrt() * effective_depth / 1000.0;
    let design_shear = total_load_kpa * governing_span_m / 2.0;

    let (moment_curve, deflection_curve) = build_curves(input, total_load_kpa, governing_span_m);

    let checks = vec![
        SlabCheck {
            name: "Bending Moment".to_string(),
            passes: k <= 0.168,
            actual_value: max_moment,
            limit_value: 0.168 * effective_depth.powi(2) * fck / 1.0e6,
            unit: "kNm/m".to_string(),
        },
        SlabCheck {
            name: "Shear Capacity".to_string(),
            passes: shear_capacity >= design_shear,
            actual_value: design_shear,
            limit_value: shear_capacity,
            unit: "kN/m".to_string(),
        },
        SlabCheck {
            name: "Minimum Thickness".to_string(),
            passes: input.thickness_mm >= min_thickness,
            actual_value: input.thickness_mm,
            limit_value: min_thickness,
            unit: "mm".to_string(),
        },
    ];

    Ok(SlabResult {
        effective_depth_mm: effective_depth,
        max_moment_knm_per_m: max_moment,
        required_steel_area_mm2_per_m: required_steel,
        main_bar_spacing_mm: main_spacing.round(),
        distribution_bar_spacing_mm: dist_spacing.round(),
        checks,
        moment_curve,
        deflection_curve,
    })
}

/// Charted moment and deflection shapes. One-way slabs are charted over
/// the governing span; two-way slabs over the panel length with softened
/// coefficients. The deflection shape (1 − u²)·u², u = 2x/L − 1, is an
/// indicative double-hump chart shape, not an elastic curve.
fn build_curves(
    input: &SlabInput,
    total_load_kpa: f64,
    governing_span_m: f64,
) -> (Vec<SlabMomentPoint>, Vec<SlabDeflectionPoint>) {
    let mut moment_curve = Vec::with_capacity(CURVE_SAMPLES + 1);
    let mut deflection_curve = Vec::with_capacity(CURVE_SAMPLES + 1);

    let (span, moment_divisor, deflection_coeff, deflection_divisor) = match input.slab_type {
        SlabType::OneWay => (governing_span_m, 2.0, 5.0, 384.0),
        SlabType::TwoWay => (input.length_m, 3.0, 1.0, 180.0),
    };

    for i in 0..=CURVE_SAMPLES {
        let x = i as f64 / CURVE_SAMPLES as f64 * span;
        let moment = total_load_kpa * x * (span - x) / moment_divisor;

        let u = 2.0 * x / span - 1.0;
        let deflection = (deflection_coeff * total_load_kpa * span.powi(4) * 1.0e9)
            / (deflection_divisor * 25000.0 * input.thickness_mm.powi(3) / 12.0)
            * (1.0 - u.powi(2))
            * u.powi(2);

        moment_curve.push(SlabMomentPoint { position_m: x, moment_knm_per_m: moment });
        deflection_curve.push(SlabDeflectionPoint {
            position_m: x,
            deflection_mm: deflection / 1000.0,
        });
    }

    (moment_curve, deflection_curve)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn test_input() -> SlabInput {
        SlabInput {
            slab_type: SlabType::OneWay,
            length_m: 1.0,
            width_m: 0.8,
            thickness_mm: 150.0,
            concrete_grade_mpa: 25.0,
            dead_load_kpa: 0.1,
            live_load_kpa: 0.1,
            main_bar_diameter_mm: 10.0,
            distribution_bar_diameter_mm: 8.0,
            cover_mm: 25.0,
        }
    }

    #[test]
    fn test_one_way_design_passes_all_checks() {
        let result = calculate(&test_input()).unwrap();

        // d = 150 - 25 - 5 = 120 mm
        assert_relative_eq!(result.effective_depth_mm, 120.0);
        // M = 0.125 * 0.2 * 1² = 0.025 kNm/m
        assert_relative_eq!(result.max_moment_knm_per_m, 0.025, max_relative = 1e-12);

        assert_eq!(result.checks.len(), 3);
        assert!(result.checks.iter().all(|c| c.passes));

        // k = 25000/(14400·25) = 0.0694 ≤ 0.168; limit = 0.168·14400·25/1e6
        let bending = &result.checks[0];
        assert_eq!(bending.name, "Bending Moment");
        assert_relative_eq!(bending.actual_value, 0.025, max_relative = 1e-12);
        assert_relative_eq!(bending.limit_value, 0.06048, max_relative = 1e-9);

        // Shear: demand 0.2·1/2 = 0.1 vs capacity 0.25·5·120/1000 = 0.15
        let shear = &result.checks[1];
        assert_eq!(shear.name, "Shear Capacity");
        assert_relative_eq!(shear.actual_value, 0.1, max_relative = 1e-12);
        assert_relative_eq!(shear.limit_value, 0.15, max_relative = 1e-12);

        // Minimum thickness: 1000/28 = 35.7 mm ≤ 150 mm
        let thickness = &result.checks[2];
        assert_eq!(thickness.name, "Minimum Thickness");
        assert_relative_eq!(thickness.actual_value, 150.0);
        assert_relative_eq!(thickness.limit_value, 1000.0 / 28.0, max_relative = 1e-12);
    }

    #[test]
    fn test_required_steel_and_spacing_cap() {
        let result = calculate(&test_input()).unwrap();

        // k = 0.069444, z = 114·(0.5 + √0.18875) = 106.53 mm,
        // As = 25000/(435·106.53) = 0.5395 mm²/m
        assert_relative_eq!(result.required_steel_area_mm2_per_m, 0.539498, max_relative = 1e-4);

        // Such a small demand leaves both spacings at the 250 mm cap
        assert_relative_eq!(result.main_bar_spacing_mm, 250.0);
        assert_relative_eq!(result.distribution_bar_spacing_mm, 250.0);
    }

    #[test]
    fn test_spacing_below_cap_for_tiny_bars() {
        let mut input = test_input();
        input.main_bar_diameter_mm = 0.2;
        let result = calculate(&input).unwrap();

        let bar_area = std::f64::consts::PI * 0.1_f64.powi(2);
        let uncapped = 1000.0 * bar_area / result.required_steel_area_mm2_per_m;
        assert!(result.main_bar_spacing_mm < 250.0);
        assert_relative_eq!(result.main_bar_spacing_mm, uncapped.round());
    }

    #[test]
    fn test_over_stressed_section_reports_domain_error() {
        // Realistic panel loads with a 1 m strip width drive k far past
        // the singly-reinforced range
        let input = SlabInput {
            slab_type: SlabType::OneWay,
            length_m: 4.0,
            width_m: 3.0,
            thickness_mm: 150.0,
            concrete_grade_mpa: 25.0,
            dead_load_kpa: 1.5,
            live_load_kpa: 2.5,
            main_bar_diameter_mm: 10.0,
            distribution_bar_diameter_mm: 8.0,
            cover_mm: 25.0,
        };

        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "DOMAIN_MATH_ERROR");
        assert!(err.to_string().contains("lever arm"));
    }

    #[test]
    fn test_one_way_curves() {
        let result = calculate(&test_input()).unwrap();

        assert_eq!(result.moment_curve.len(), 21);
        assert_eq!(result.deflection_curve.len(), 21);

        // Parabolic moment peaks at midspan and equals c·w·L² with c = 1/8
        let midspan = &result.moment_curve[10];
        assert_relative_eq!(midspan.position_m, 0.5, max_relative = 1e-12);
        assert_relative_eq!(
            midspan.moment_knm_per_m,
            result.max_moment_knm_per_m,
            max_relative = 1e-12
        );
        assert_relative_eq!(result.moment_curve[0].moment_knm_per_m, 0.0);

        // The indicative deflection shape vanishes at the ends and at
        // midspan with symmetric humps between
        assert_relative_eq!(result.deflection_curve[0].deflection_mm, 0.0);
        assert!(result.deflection_curve[10].deflection_mm.abs() < 1e-15);
        assert!(result.deflection_curve[5].deflection_mm > 0.0);
        assert_relative_eq!(
            result.deflection_curve[5].deflection_mm,
            result.deflection_curve[15].deflection_mm,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_two_way_design() {
        let mut input = test_input();
        input.slab_type = SlabType::TwoWay;
        input.length_m = 0.9;
        input.width_m = 1.0;
        let result = calculate(&input).unwrap();

        // Moment still uses the governing span: 0.086·0.2·1² = 0.0172
        assert_relative_eq!(result.max_moment_knm_per_m, 0.0172, max_relative = 1e-12);

        // Curves chart the panel length with the softened 1/3 coefficient
        let midspan = &result.moment_curve[10];
        assert_relative_eq!(midspan.position_m, 0.45, max_relative = 1e-12);
        assert_relative_eq!(
            midspan.moment_knm_per_m,
            0.2 * 0.45 * 0.45 / 3.0,
            max_relative = 1e-12
        );

        // Thickness limit switches to span/32
        assert_relative_eq!(result.checks[2].limit_value, 1000.0 / 32.0, max_relative = 1e-12);
    }

    #[test]
    fn test_distribution_steel_fractions() {
        assert_relative_eq!(SlabType::OneWay.distribution_steel_fraction(), 0.2);
        assert_relative_eq!(SlabType::TwoWay.distribution_steel_fraction(), 0.8);
        assert_relative_eq!(SlabType::OneWay.moment_coefficient(), 0.125);
        assert_relative_eq!(SlabType::TwoWay.moment_coefficient(), 0.086);
    }

    #[test]
    fn test_invalid_inputs() {
        let mut input = test_input();
        input.thickness_mm = 0.0;
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_INPUT");

        let mut input = test_input();
        input.dead_load_kpa = -1.0;
        assert!(calculate(&input).is_err());

        let mut input = test_input();
        input.concrete_grade_mpa = f64::NAN;
        assert!(calculate(&input).is_err());

        // Cover plus half the bar swallows the whole thickness
        let mut input = test_input();
        input.thickness_mm = 30.0;
        input.cover_mm = 25.0;
        input.main_bar_diameter_mm = 12.0;
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_serde_round_trip() {
        let input = test_input();
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"OneWay\""));
        let back: SlabInput = serde_json::from_str(&json).unwrap();
        assert_relative_eq!(back.thickness_mm, 150.0);

        let result = calculate(&input).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        let back: SlabResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.checks.len(), 3);
    }
}
