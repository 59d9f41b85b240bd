//! # Structural Calculations
//!
//! This module contains all structural calculation types. Each calculation
//! follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! Every function is synchronous, deterministic, and free of shared
//! state, so repeated calls with the same input return identical output
//! and concurrent callers need no locking.
//!
//! ## JSON-First API
//!
//! All types are designed for UI and automation consumers:
//! - Comprehensive rustdoc with examples
//! - Clean JSON serialization
//! - Structured error responses
//!
//! ## Available Calculations
//!
//! - [`beam`] - Simply-supported beam shear/moment/deflection diagrams
//! - [`deflection`] - Deflection checks for 3 support × 4 load cases
//! - [`seismic`] - Equivalent-static seismic base shear and distribution
//! - [`slab`] - One-way/two-way slab reinforcement design
//! - [`code_check`] - Beam proportioning checks per ACI/Eurocode/IS

pub mod beam;
pub mod code_check;
pub mod deflection;
pub mod seismic;
pub mod slab;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;

// Re-export commonly used types
pub use beam::{BeamInput, BeamResult};
pub use code_check::{CodeCheckInput, CodeCheckResult};
pub use deflection::{DeflectionInput, DeflectionResult};
pub use seismic::{SeismicInput, SeismicResult};
pub use slab::{SlabInput, SlabResult};

/// Enum wrapper for all calculation inputs.
///
/// This allows storing heterogeneous calculations in a single collection
/// while maintaining type safety and clean serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationInput {
    /// Simply-supported beam diagram calculation
    Beam(BeamInput),
    /// Support/load-case deflection check
    Deflection(DeflectionInput),
    /// Seismic base shear and floor force distribution
    Seismic(SeismicInput),
    /// Slab reinforcement design
    Slab(SlabInput),
    /// Design code proportioning checks
    CodeCheck(CodeCheckInput),
}

impl CalculationInput {
    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationInput::Beam(_) => "Beam",
            CalculationInput::Deflection(_) => "Deflection",
            CalculationInput::Seismic(_) => "Seismic",
            CalculationInput::Slab(_) => "Slab",
            CalculationInput::CodeCheck(_) => "CodeCheck",
        }
    }

    /// Validate the wrapped input without running the calculation
    pub fn validate(&self) -> CalcResult<()> {
        match self {
            CalculationInput::Beam(input) => input.validate(),
            CalculationInput::Deflection(input) => input.validate(),
            CalculationInput::Seismic(input) => input.validate(),
            CalculationInput::Slab(input) => input.validate(),
            CalculationInput::CodeCheck(input) => input.validate(),
        }
    }
}

/// Enum wrapper for all calculation results, tagged to mirror
/// [`CalculationInput`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    /// Beam diagram results
    Beam(BeamResult),
    /// Deflection check results
    Deflection(DeflectionResult),
    /// Seismic load results
    Seismic(SeismicResult),
    /// Slab design results
    Slab(SlabResult),
    /// Code check results
    CodeCheck(CodeCheckResult),
}

impl CalculationOutput {
    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationOutput::Beam(_) => "Beam",
            CalculationOutput::Deflection(_) => "Deflection",
            CalculationOutput::Seismic(_) => "Seismic",
            CalculationOutput::Slab(_) => "Slab",
            CalculationOutput::CodeCheck(_) => "CodeCheck",
        }
    }
}

/// Run whichever calculation the input wraps.
///
/// # Arguments
///
/// * `input` - Any calculation input
///
/// # Returns
///
/// * `Ok(CalculationOutput)` - The matching result variant
/// * `Err(CalcError)` - Validation or domain error from the calculation
pub fn evaluate(input: &CalculationInput) -> CalcResult<CalculationOutput> {
    match input {
        CalculationInput::Beam(input) => beam::calculate(input).map(CalculationOutput::Beam),
        CalculationInput::Deflection(input) => {
            deflection::calculate(input).map(CalculationOutput::Deflection)
        }
        CalculationInput::Seismic(input) => {
            seismic::calculate(input).map(CalculationOutput::Seismic)
        }
        CalculationInput::Slab(input) => slab::calculate(input).map(CalculationOutput::Slab),
        CalculationInput::CodeCheck(input) => {
            code_check::calculate(input).map(CalculationOutput::CodeCheck)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beam_input() -> CalculationInput {
        CalculationInput::Beam(BeamInput {
            span_m: 5.0,
            uniform_load_kn_per_m: 10.0,
            elastic_modulus_gpa: 200.0,
            moment_of_inertia_m4: 0.00004,
        })
    }

    #[test]
    fn test_evaluate_dispatches_by_variant() {
        let output = evaluate(&beam_input()).unwrap();
        assert_eq!(output.calc_type(), "Beam");
        match output {
            CalculationOutput::Beam(result) => {
                assert!((result.max_moment_knm - 31.25).abs() < 1e-9);
            }
            other => panic!("expected a beam result, got {}", other.calc_type()),
        }
    }

    #[test]
    fn test_evaluate_propagates_errors() {
        let input = CalculationInput::Beam(BeamInput {
            span_m: -1.0,
            uniform_load_kn_per_m: 10.0,
            elastic_modulus_gpa: 200.0,
            moment_of_inertia_m4: 0.00004,
        });
        assert_eq!(evaluate(&input).unwrap_err().error_code(), "INVALID_INPUT");
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_tagged_serialization() {
        let json = serde_json::to_string(&beam_input()).unwrap();
        assert!(json.contains("\"type\":\"Beam\""));
        let back: CalculationInput = serde_json::from_str(&json).unwrap();
        assert_eq!(back.calc_type(), "Beam");

        let output = evaluate(&back).unwrap();
        let json = serde_json::to_string(&output).unwrap();
        assert!(json.contains("\"type\":\"Beam\""));
        let back: CalculationOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(back.calc_type(), "Beam");
    }
}
