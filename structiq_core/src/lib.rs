//! # structiq_core - Structural Engineering Calculation Engine
//!
//! `structiq_core` is the computational heart of StructIQ, providing structural
//! engineering calculations with a clean, JSON-first API. All inputs and outputs
//! are serializable value records, making the engine easy to drive from UIs,
//! scripts, and automation.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Well-Documented**: Every type and function has examples
//!
//! ## Quick Start
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
//!
//! // Serialize for storage or transmission
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("max_moment_knm"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - All structural calculation types (beam, deflection, seismic, slab, code checks)
//! - [`project`] - Project container, metadata, and settings
//! - [`materials`] - Common material property table
//! - [`design_codes`] - Per-standard limits and clause citations
//! - [`seismic_factors`] - Zone/soil/occupancy/ductility factor tables
//! - [`units`] - Stress unit conversion
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod design_codes;
pub mod errors;
pub mod materials;
pub mod project;
pub mod seismic_factors;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use project::{Project, ProjectMetadata, ProjectSettings};
