//! # Beam Analysis
//!
//! Shear, moment, and deflection analysis for a simply-supported beam
//! under a full-span uniformly distributed load.
//!
//! ## Assumptions
//!
//! - Simply-supported (pin-roller) boundary conditions
//! - Single uniformly distributed load over the whole span
//! - Prismatic, linear-elastic section (Euler-Bernoulli theory)
//! - Positive load acts downward
//!
//! ## Example
//!
//! ```rust
//! use structiq_core::calculations::beam::{calculate, BeamInput};
//!
//! let input = BeamInput {
//!     span_m: 5.0,
//!     uniform_load_kn_per_m: 10.0,
//!     elastic_modulus_gpa: 200.0,
//!     moment_of_inertia_m4: 0.00004,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.max_moment_knm - 31.25).abs() < 1e-9);
//! assert!((result.max_shear_kn - 25.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Number of equal intervals the span is divided into for the diagram.
/// The diagram therefore has `CURVE_SAMPLES + 1` points including both ends.
const CURVE_SAMPLES: usize = 50;

/// Input parameters for simply-supported beam analysis.
///
/// ## JSON Example
///
/// ```json
/// {
///   "span_m": 5.0,
///   "uniform_load_kn_per_m": 10.0,
///   "elastic_modulus_gpa": 200.0,
///   "moment_of_inertia_m4": 0.00004
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamInput {
    /// Clear span in metres
    pub span_m: f64,

    /// Uniformly distributed load in kN/m (positive = downward).
    /// Any real value is accepted; a negative load is uplift.
    pub uniform_load_kn_per_m: f64,

    /// Elastic modulus E in GPa
    pub elastic_modulus_gpa: f64,

    /// Moment of inertia I in m⁴
    pub moment_of_inertia_m4: f64,
}

impl BeamInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.span_m.is_finite() || self.span_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "span_m",
                self.span_m.to_string(),
                "Span must be a positive, finite number",
            ));
        }
        if !self.uniform_load_kn_per_m.is_finite() {
            return Err(CalcError::invalid_input(
                "uniform_load_kn_per_m",
                self.uniform_load_kn_per_m.to_string(),
                "Load must be a finite number",
            ));
        }
        if !self.elastic_modulus_gpa.is_finite() || self.elastic_modulus_gpa <= 0.0 {
            return Err(CalcError::invalid_input(
                "elastic_modulus_gpa",
                self.elastic_modulus_gpa.to_string(),
                "Elastic modulus must be a positive, finite number",
            ));
        }
        if !self.moment_of_inertia_m4.is_finite() || self.moment_of_inertia_m4 <= 0.0 {
            return Err(CalcError::invalid_input(
                "moment_of_inertia_m4",
                self.moment_of_inertia_m4.to_string(),
                "Moment of inertia must be a positive, finite number",
            ));
        }
        Ok(())
    }
}

/// One sample point along the beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamDiagramPoint {
    /// Distance from the left support (m)
    pub position_m: f64,

    /// Shear force V(x) (kN)
    pub shear_kn: f64,

    /// Bending moment M(x) (kN·m)
    pub moment_knm: f64,

    /// Deflection δ(x) (mm)
    pub deflection_mm: f64,
}

/// Results from beam analysis.
///
/// ## JSON Example (diagram truncated)
///
/// ```json
/// {
///   "max_shear_kn": 25.0,
///   "max_moment_knm": 31.25,
///   "max_deflection_mm": 0.0102,
///   "diagram": [
///     { "position_m": 0.0, "shear_kn": 25.0, "moment_knm": 0.0, "deflection_mm": 0.0 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamResult {
    /// Maximum shear force at the supports: V = wL/2 (kN)
    pub max_shear_kn: f64,

    /// Maximum midspan moment: M = wL²/8 (kN·m)
    pub max_moment_knm: f64,

    /// Maximum midspan deflection: δ = 5wL⁴/(384EI) (mm)
    pub max_deflection_mm: f64,

    /// Shear/moment/deflection sampled at 51 stations along the span
    pub diagram: Vec<BeamDiagramPoint>,
}

/// Analyze a simply-supported beam under a uniform load.
///
/// This is a pure function: identical input yields identical output.
///
/// # Arguments
///
/// * `input` - Beam parameters (span, load, E, I)
///
/// # Returns
///
/// * `Ok(BeamResult)` - Maxima plus the full diagram
/// * `Err(CalcError)` - Structured error if inputs are invalid
pub fn calculate(input: &BeamInput) -> CalcResult<BeamResult> {
    input.validate()?;

    let w = input.uniform_load_kn_per_m;
    let length = input.span_m;

    // Flexural rigidity with GPa·m⁴ brought to consistent SI
    let ei = input.elastic_modulus_gpa * input.moment_of_inertia_m4 * 1.0e9;

    let dx = length / CURVE_SAMPLES as f64;
    let mut diagram = Vec::with_capacity(CURVE_SAMPLES + 1);
    for i in 0..=CURVE_SAMPLES {
        let x = i as f64 * dx;

        // V(x) = w·(L/2 − x)
        let shear_kn = w * (length / 2.0 - x);

        // M(x) = w·x·(L − x)/2
        let moment_knm = w * x * (length - x) / 2.0;

        // δ(x) = w·x·(L³ − 2Lx² + x³)/(24EI), reported in mm
        let deflection_mm =
            w * x * (length.powi(3) - 2.0 * length * x.powi(2) + x.powi(3)) / (24.0 * ei) * 1000.0;

        diagram.push(BeamDiagramPoint {
            position_m: x,
            shear_kn,
            moment_knm,
            deflection_mm,
        });
    }

    Ok(BeamResult {
        max_shear_kn: w * length / 2.0,
        max_moment_knm: w * length.powi(2) / 8.0,
        max_deflection_mm: 5.0 * w * length.powi(4) / (384.0 * ei) * 1000.0,
        diagram,
    })
}
