//! # Design Code Checker
//!
//! Quick beam proportioning checks against ACI 318, Eurocode 2, or
//! IS 456 limits: span-to-depth ratio, width-to-depth ratio, a simplified
//! moment capacity comparison, and for IS 456 the minimum reinforcement
//! percentage. Every check carries its code clause citation.
//!
//! The numeric limits and citations live on [`DesignCode`] so adding a
//! standard extends every check through exhaustive matches.
//!
//! ## Example
//!
//! ```rust
//! use structiq_core::calculations::code_check::{calculate, CodeCheckInput};
//! use structiq_core::design_codes::DesignCode;
//!
//! let input = CodeCheckInput {
//!     span_m: 5.0,
//!     depth_mm: 500.0,
//!     width_mm: 300.0,
//!     distributed_load_kn_per_m: 10.0,
//!     code: DesignCode::Aci,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!(result.overall_pass);
//! assert_eq!(result.checks.len(), 3);
//! ```

use serde::{Deserialize, Serialize};

use crate::design_codes::DesignCode;
use crate::errors::{CalcError, CalcResult};

/// Concrete strength assumed by the simplified moment capacity (MPa)
const CONCRETE_STRENGTH_MPA: f64 = 25.0;

/// Steel yield strength assumed by the IS minimum steel check (MPa)
const STEEL_YIELD_MPA: f64 = 500.0;

/// Input parameters for the design code checker.
///
/// ## JSON Example
///
/// ```json
/// {
///   "span_m": 5.0,
///   "depth_mm": 500.0,
///   "width_mm": 300.0,
///   "distributed_load_kn_per_m": 10.0,
///   "code": "IndianStandard"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeCheckInput {
    /// Beam span in metres
    pub span_m: f64,

    /// Overall beam depth in mm
    pub depth_mm: f64,

    /// Beam width in mm
    pub width_mm: f64,

    /// Uniformly distributed load in kN/m
    pub distributed_load_kn_per_m: f64,

    /// Design standard to check against
    pub code: DesignCode,
}

impl CodeCheckInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.span_m.is_finite() || self.span_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "span_m",
                self.span_m.to_string(),
                "Span must be a positive, finite number",
            ));
        }
        if !self.depth_mm.is_finite() || self.depth_mm <= 0.0 {
            return Err(CalcError::invalid_input(
                "depth_mm",
                self.depth_mm.to_string(),
                "Depth must be a positive, finite number",
            ));
        }
        if !self.width_mm.is_finite() || self.width_mm <= 0.0 {
            return Err(CalcError::invalid_input(
                "width_mm",
                self.width_mm.to_string(),
                "Width must be a positive, finite number",
            ));
        }
        if !self.distributed_load_kn_per_m.is_finite() || self.distributed_load_kn_per_m < 0.0 {
            return Err(CalcError::invalid_input(
                "distributed_load_kn_per_m",
                self.distributed_load_kn_per_m.to_string(),
                "Load must be a non-negative, finite number",
            ));
        }
        Ok(())
    }
}

/// One code check with its computed value and clause citation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeCheck {
    /// Check name, e.g. "Span-to-Depth Ratio"
    pub name: String,

    /// Computed value being checked
    pub value: f64,

    /// Human-readable limit, e.g. "≤ 20"
    pub limit_description: String,

    /// True when the value satisfies the limit
    pub passes: bool,

    /// Code clause the limit comes from
    pub code_reference: String,
}

/// Results from the design code checker.
///
/// ## JSON Example (checks truncated)
///
/// ```json
/// {
///   "checks": [
///     {
///       "name": "Span-to-Depth Ratio",
///       "value": 10.0,
///       "limit_description": "≤ 20",
///       "passes": true,
///       "code_reference": "ACI 318-19 Table 9.3.1.1"
///     }
///   ],
///   "overall_pass": true
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeCheckResult {
    /// Individual checks in evaluation order
    pub checks: Vec<CodeCheck>,

    /// True when every check passes
    pub overall_pass: bool,
}

/// Run the proportioning checks for the selected design standard.
///
/// # Arguments
///
/// * `input` - Beam geometry, load, and design standard
///
/// # Returns
///
/// * `Ok(CodeCheckResult)` - Three checks, four for IS 456
/// * `Err(CalcError)` - Structured error if inputs are invalid
pub fn calculate(input: &CodeCheckInput) -> CalcResult<CodeCheckResult> {
    input.validate()?;

    let code = input.code;
    let mut checks = Vec::with_capacity(4);

    let span_to_depth = input.span_m * 1000.0 / input.depth_mm;
    let span_limit = code.span_depth_limit();
    checks.push(CodeCheck {
        name: "Span-to-Depth Ratio".to_string(),
        value: span_to_depth,
        limit_description: format!("≤ {span_limit}"),
        passes: span_to_depth <= span_limit,
        code_reference: code.span_depth_reference().to_string(),
    });

    let width_to_depth = input.width_mm / input.depth_mm;
    let width_min = code.width_depth_min();
    checks.push(CodeCheck {
        name: "Width-to-Depth Ratio".to_string(),
        value: width_to_depth,
        limit_description: format!("≥ {width_min}"),
        passes: width_to_depth >= width_min,
        code_reference: code.width_depth_reference().to_string(),
    });

    // M = wL²/8 against a coefficient-based allowable moment with an
    // assumed 25 MPa concrete
    let moment = input.distributed_load_kn_per_m * input.span_m.powi(2) / 8.0;
    let allowable_moment = code.moment_coefficient()
        * input.width_mm
        * input.depth_mm.powi(2)
        * CONCRETE_STRENGTH_MPA
        / 1.0e6;
    checks.push(CodeCheck {
        name: "Moment Capacity".to_string(),
        value: moment,
        limit_description: format!("≤ {allowable_moment:.2} kN·m"),
        passes: moment <= allowable_moment,
        code_reference: code.moment_reference().to_string(),
    });

    if let Some(min_percent) = code.min_reinforcement_percent() {
        // Steel demand for the simplified moment with z = 0.9d, as a
        // percentage of the gross web area
        let lever_arm = 0.9 * input.depth_mm;
        let required_steel = moment * 1.0e6 / (0.87 * STEEL_YIELD_MPA * lever_arm);
        let percentage = 100.0 * required_steel / (input.width_mm * input.depth_mm);
        checks.push(CodeCheck {
            name: "Minimum Reinforcement".to_string(),
            value: percentage,
            limit_description: format!("≥ {min_percent}%"),
            passes: percentage >= min_percent,
            code_reference: code.min_reinforcement_reference().to_string(),
        });
    }

    let overall_pass = checks.iter().all(|check| check.passes);

    Ok(CodeCheckResult { checks, overall_pass })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn test_input(code: DesignCode) -> CodeCheckInput {
        CodeCheckInput {
            span_m: 5.0,
            depth_mm: 500.0,
            width_mm: 300.0,
            distributed_load_kn_per_m: 10.0,
            code,
        }
    }

    #[test]
    fn test_aci_proportions_pass() {
        let result = calculate(&test_input(DesignCode::Aci)).unwrap();

        assert_eq!(result.checks.len(), 3);
        assert!(result.overall_pass);

        // 5000/500 = 10 against the ACI limit of 20
        let span_depth = &result.checks[0];
        assert_eq!(span_depth.name, "Span-to-Depth Ratio");
        assert_relative_eq!(span_depth.value, 10.0);
        assert_eq!(span_depth.limit_description, "≤ 20");
        assert_eq!(span_depth.code_reference, "ACI 318-19 Table 9.3.1.1");

        // 300/500 = 0.6 against 0.3
        let width_depth = &result.checks[1];
        assert_relative_eq!(width_depth.value, 0.6, max_relative = 1e-12);
        assert_eq!(width_depth.limit_description, "≥ 0.3");

        // M = 10·25/8 = 31.25 vs 0.5·300·500²·25/1e6 = 937.5
        let moment = &result.checks[2];
        assert_relative_eq!(moment.value, 31.25);
        assert!(moment.passes);
        assert_eq!(moment.limit_description, "≤ 937.50 kN·m");
    }

    #[test]
    fn test_is_code_adds_min_reinforcement_check() {
        let result = calculate(&test_input(DesignCode::IndianStandard)).unwrap();

        assert_eq!(result.checks.len(), 4);

        // As = 31.25e6/(0.87·500·0.9·500) = 159.64 mm², over 300·500 mm²
        // that is 0.106%, short of the 0.12% floor
        let min_steel = &result.checks[3];
        assert_eq!(min_steel.name, "Minimum Reinforcement");
        assert_relative_eq!(min_steel.value, 0.106428, max_relative = 1e-4);
        assert_eq!(min_steel.limit_description, "≥ 0.12%");
        assert_eq!(min_steel.code_reference, "IS 456:2000 26.5.2.1");
        assert!(!min_steel.passes);
        assert!(!result.overall_pass);

        // IS tightens the other limits too
        assert_eq!(result.checks[0].limit_description, "≤ 16");
        assert_eq!(result.checks[1].limit_description, "≥ 0.5");
        // 0.36·300·500²·25/1e6 = 675
        assert_eq!(result.checks[2].limit_description, "≤ 675.00 kN·m");
    }

    #[test]
    fn test_is_code_all_pass_with_heavier_load() {
        let mut input = test_input(DesignCode::IndianStandard);
        input.distributed_load_kn_per_m = 15.0;
        let result = calculate(&input).unwrap();

        // M = 46.875, As = 239.46 mm², 0.1596% ≥ 0.12%
        let min_steel = &result.checks[3];
        assert_relative_eq!(min_steel.value, 0.159642, max_relative = 1e-4);
        assert!(min_steel.passes);
        assert!(result.overall_pass);
    }

    #[test]
    fn test_eurocode_limits() {
        let result = calculate(&test_input(DesignCode::Eurocode)).unwrap();

        assert_eq!(result.checks.len(), 3);
        assert_eq!(result.checks[0].limit_description, "≤ 18");
        assert_eq!(result.checks[0].code_reference, "EN 1992-1-1:2004 7.4.1");
        assert_eq!(result.checks[1].limit_description, "≥ 0.3");
        assert_eq!(result.checks[2].limit_description, "≤ 937.50 kN·m");
    }

    #[test]
    fn test_slender_beam_fails_span_depth() {
        let mut input = test_input(DesignCode::Aci);
        input.span_m = 12.0;
        let result = calculate(&input).unwrap();

        // 12000/500 = 24 > 20
        assert_relative_eq!(result.checks[0].value, 24.0);
        assert!(!result.checks[0].passes);
        assert!(!result.overall_pass);
    }

    #[test]
    fn test_overloaded_beam_fails_moment() {
        let mut input = test_input(DesignCode::Aci);
        input.distributed_load_kn_per_m = 400.0;
        let result = calculate(&input).unwrap();

        // M = 400·25/8 = 1250 > 937.5
        let moment = &result.checks[2];
        assert_relative_eq!(moment.value, 1250.0);
        assert!(!moment.passes);
        assert!(!result.overall_pass);
    }

    #[test]
    fn test_width_depth_boundary_is_inclusive() {
        let mut input = test_input(DesignCode::IndianStandard);
        input.width_mm = 250.0;
        input.distributed_load_kn_per_m = 20.0;
        let result = calculate(&input).unwrap();

        // 250/500 = 0.5 meets the IS minimum of 0.5 exactly
        assert_relative_eq!(result.checks[1].value, 0.5);
        assert!(result.checks[1].passes);
    }

    #[test]
    fn test_invalid_inputs() {
        let mut input = test_input(DesignCode::Aci);
        input.depth_mm = 0.0;
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_INPUT");

        let mut input = test_input(DesignCode::Aci);
        input.distributed_load_kn_per_m = f64::NAN;
        assert!(calculate(&input).is_err());

        let mut input = test_input(DesignCode::Aci);
        input.span_m = -5.0;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let input = test_input(DesignCode::Eurocode);
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"Eurocode\""));

        let result = calculate(&input).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        let back: CodeCheckResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.checks.len(), 3);
        assert_eq!(back.overall_pass, result.overall_pass);
    }
}
