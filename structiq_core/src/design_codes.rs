//! # Design Code Standards
//!
//! The closed set of design codes the code checker can evaluate against,
//! with each code's numeric limits and clause citations.
//!
//! ## Overview
//!
//! Every check the checker performs compares a computed value against a
//! per-code limit and carries a clause citation so the UI can show where
//! the limit comes from:
//!
//! | Check        | ACI 318-19 | Eurocode 2 | IS 456:2000 |
//! |--------------|------------|------------|-------------|
//! | span/depth ≤ | 20         | 18         | 16          |
//! | width/depth ≥| 0.3        | 0.3        | 0.5         |
//! | moment coeff | 0.5        | 0.5        | 0.36        |
//! | min steel %  | -          | -          | 0.12        |

use serde::{Deserialize, Serialize};

/// Supported design code standards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DesignCode {
    /// ACI 318-19 (American Concrete Institute)
    #[default]
    Aci,

    /// EN 1992-1-1:2004 (Eurocode 2)
    Eurocode,

    /// IS 456:2000 (Indian Standard, plain and reinforced concrete)
    IndianStandard,
}

impl DesignCode {
    /// All code variants for UI selection
    pub const ALL: [DesignCode; 3] = [
        DesignCode::Aci,
        DesignCode::Eurocode,
        DesignCode::IndianStandard,
    ];

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            DesignCode::Aci => "ACI 318-19",
            DesignCode::Eurocode => "Eurocode 2 (EN 1992-1-1)",
            DesignCode::IndianStandard => "IS 456:2000",
        }
    }

    /// Maximum simply-supported span/effective-depth ratio
    pub fn span_depth_limit(&self) -> f64 {
        match self {
            DesignCode::Aci => 20.0,
            DesignCode::Eurocode => 18.0,
            DesignCode::IndianStandard => 16.0,
        }
    }

    /// Clause defining the span/depth limit
    pub fn span_depth_reference(&self) -> &'static str {
        match self {
            DesignCode::Aci => "ACI 318-19 Table 9.3.1.1",
            DesignCode::Eurocode => "EN 1992-1-1:2004 7.4.1",
            DesignCode::IndianStandard => "IS 456:2000 23.2.1",
        }
    }

    /// Minimum width/depth ratio for lateral stability
    pub fn width_depth_min(&self) -> f64 {
        match self {
            DesignCode::Aci => 0.3,
            DesignCode::Eurocode => 0.3,
            DesignCode::IndianStandard => 0.5,
        }
    }

    /// Clause defining the width/depth minimum
    pub fn width_depth_reference(&self) -> &'static str {
        match self {
            DesignCode::Aci => "ACI 318-19 Section 9.2",
            DesignCode::Eurocode => "EN 1992-1-1:2004 5.3.1",
            DesignCode::IndianStandard => "IS 456:2000 20.1",
        }
    }

    /// Coefficient in the simplified allowable-moment formula
    /// M_allow = coeff × b × d² × fck
    pub fn moment_coefficient(&self) -> f64 {
        match self {
            DesignCode::Aci => 0.5,
            DesignCode::Eurocode => 0.5,
            DesignCode::IndianStandard => 0.36,
        }
    }

    /// Clause defining the flexural capacity model
    pub fn moment_reference(&self) -> &'static str {
        match self {
            DesignCode::Aci => "ACI 318-19 Section 22.3",
            DesignCode::Eurocode => "EN 1992-1-1:2004 6.1",
            DesignCode::IndianStandard => "IS 456:2000 38.1",
        }
    }

    /// Minimum reinforcement percentage, where the code prescribes one
    /// for this simplified check (IS only)
    pub fn min_reinforcement_percent(&self) -> Option<f64> {
        match self {
            DesignCode::Aci => None,
            DesignCode::Eurocode => None,
            DesignCode::IndianStandard => Some(0.12),
        }
    }

    /// Clause defining the minimum reinforcement percentage
    pub fn min_reinforcement_reference(&self) -> &'static str {
        match self {
            DesignCode::Aci => "ACI 318-19 Section 9.6.1",
            DesignCode::Eurocode => "EN 1992-1-1:2004 9.2.1.1",
            DesignCode::IndianStandard => "IS 456:2000 26.5.2.1",
        }
    }
}

impl std::fmt::Display for DesignCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_depth_limits() {
        assert_eq!(DesignCode::Aci.span_depth_limit(), 20.0);
        assert_eq!(DesignCode::Eurocode.span_depth_limit(), 18.0);
        assert_eq!(DesignCode::IndianStandard.span_depth_limit(), 16.0);
    }

    #[test]
    fn test_width_depth_minimums() {
        assert_eq!(DesignCode::Aci.width_depth_min(), 0.3);
        assert_eq!(DesignCode::Eurocode.width_depth_min(), 0.3);
        assert_eq!(DesignCode::IndianStandard.width_depth_min(), 0.5);
    }

    #[test]
    fn test_moment_coefficients() {
        assert_eq!(DesignCode::Aci.moment_coefficient(), 0.5);
        assert_eq!(DesignCode::Eurocode.moment_coefficient(), 0.5);
        assert_eq!(DesignCode::IndianStandard.moment_coefficient(), 0.36);
    }

    #[test]
    fn test_min_reinforcement_is_only() {
        assert_eq!(DesignCode::Aci.min_reinforcement_percent(), None);
        assert_eq!(DesignCode::Eurocode.min_reinforcement_percent(), None);
        assert_eq!(
            DesignCode::IndianStandard.min_reinforcement_percent(),
            Some(0.12)
        );
    }

    #[test]
    fn test_citations() {
        assert_eq!(
            DesignCode::Aci.span_depth_reference(),
            "ACI 318-19 Table 9.3.1.1"
        );
        assert_eq!(
            DesignCode::Eurocode.width_depth_reference(),
            "EN 1992-1-1:2004 5.3.1"
        );
        assert_eq!(DesignCode::IndianStandard.moment_reference(), "IS 456:2000 38.1");
    }
}
