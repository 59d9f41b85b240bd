//! # Project Data Structures
//!
//! The `Project` struct is the root container for all calculation data.
//! Projects serialize to `.siq` (StructIQ) files as human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, name, timestamps)
//! ├── settings: ProjectSettings (units, accent color, cloud sync)
//! └── items: HashMap<Uuid, CalculationItem> (labelled calculations)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use structiq_core::project::Project;
//!
//! let project = Project::new("Office Tower Renovation");
//!
//! // Serialize to JSON
//! let json = serde_json::to_string_pretty(&project).unwrap();
//! assert!(json.contains("Office Tower Renovation"));
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::CalculationInput;

/// Current schema version for .siq files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
///
/// This is the top-level struct that gets serialized to `.siq` files.
/// Items are stored in a flat UUID-keyed map for O(1) lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (version, name, timestamps)
    pub meta: ProjectMetadata,

    /// Per-project settings
    pub settings: ProjectSettings,

    /// All calculation items, keyed by UUID
    ///
    /// Using a HashMap instead of a Vec provides:
    /// - O(1) lookup by id
    /// - No duplicate ID issues
    /// - Stable references when items are reordered
    pub items: HashMap<Uuid, CalculationItem>,
}

impl Project {
    /// Create a new empty project.
    ///
    /// # Arguments
    ///
    /// * `name` - Project name shown in listings
    ///
    /// # Example
    ///
    /// ```rust
    /// use structiq_core::project::Project;
    ///
    /// let project = Project::new("Warehouse Extension");
    /// assert_eq!(project.meta.name, "Warehouse Extension");
    /// assert!(project.items.is_empty());
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                name: name.into(),
                created: now,
                modified: now,
            },
            settings: ProjectSettings::default(),
            items: HashMap::new(),
        }
    }

    /// Add a calculation item to the project.
    ///
    /// Returns the UUID assigned to the item.
    ///
    /// # Example
    ///
    /// ```rust
    /// use structiq_core::project::{CalculationItem, Project};
    /// use structiq_core::calculations::{BeamInput, CalculationInput};
    ///
    /// let mut project = Project::new("Warehouse Extension");
    ///
    /// let beam = BeamInput {
    ///     span_m: 5.0,
    ///     uniform_load_kn_per_m: 10.0,
    ///     elastic_modulus_gpa: 200.0,
    ///     moment_of_inertia_m4: 0.00004,
    /// };
    ///
    /// let id = project.add_item(CalculationItem::new("B-1", CalculationInput::Beam(beam)));
    /// assert!(project.items.contains_key(&id));
    /// ```
    pub fn add_item(&mut self, item: CalculationItem) -> Uuid {
        let id = Uuid::new_v4();
        self.items.insert(id, item);
        self.touch();
        id
    }

    /// Remove a calculation item by UUID.
    ///
    /// Returns the removed item if it existed.
    pub fn remove_item(&mut self, id: &Uuid) -> Option<CalculationItem> {
        let item = self.items.remove(id);
        if item.is_some() {
            self.touch();
        }
        item
    }

    /// Get a calculation item by UUID.
    pub fn get_item(&self, id: &Uuid) -> Option<&CalculationItem> {
        self.items.get(id)
    }

    /// Get a mutable reference to a calculation item by UUID.
    ///
    /// Note: This method updates the modified timestamp when an item is
    /// found, since the caller is expected to change it.
    pub fn get_item_mut(&mut self, id: &Uuid) -> Option<&mut CalculationItem> {
        if self.items.contains_key(id) {
            self.meta.modified = Utc::now();
            self.items.get_mut(id)
        } else {
            None
        }
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Number of calculation items in the project.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("")
    }
}

/// One labelled calculation stored in a project.
///
/// The label is presentation state (e.g. "B-1", "Roof Slab"); the wrapped
/// input record stays exactly what the calculator consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationItem {
    /// User-provided label for listings and reports
    pub label: String,

    /// The calculation input this item holds
    pub input: CalculationInput,
}

impl CalculationItem {
    /// Create a labelled item.
    pub fn new(label: impl Into<String>, input: CalculationInput) -> Self {
        CalculationItem { label: label.into(), input }
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Project name shown in listings
    pub name: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

/// Per-project settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSettings {
    /// Measurement system for display formatting
    pub units: UnitsSystem,

    /// UI accent color as a hex string
    pub accent_color: String,

    /// Whether the project syncs to cloud storage
    pub cloud_sync_enabled: bool,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        ProjectSettings {
            units: UnitsSystem::Metric,
            accent_color: "#8B5CF6".to_string(),
            cloud_sync_enabled: false,
        }
    }
}

/// Measurement system preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum UnitsSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitsSystem {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            UnitsSystem::Metric => "Metric",
            UnitsSystem::Imperial => "Imperial",
        }
    }
}

impl std::fmt::Display for UnitsSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{evaluate, BeamInput};

    fn beam_item(label: &str) -> CalculationItem {
        CalculationItem::new(
            label,
            CalculationInput::Beam(BeamInput {
                span_m: 5.0,
                uniform_load_kn_per_m: 10.0,
                elastic_modulus_gpa: 200.0,
                moment_of_inertia_m4: 0.00004,
            }),
        )
    }

    #[test]
    fn test_project_creation() {
        let project = Project::new("Office Tower Renovation");
        assert_eq!(project.meta.name, "Office Tower Renovation");
        assert_eq!(project.meta.version, SCHEMA_VERSION);
        assert_eq!(project.item_count(), 0);
        assert_eq!(project.settings.units, UnitsSystem::Metric);
        assert!(!project.settings.cloud_sync_enabled);
    }

    #[test]
    fn test_project_serialization() {
        let mut project = Project::new("Warehouse Extension");
        project.add_item(beam_item("B-1"));
        let json = serde_json::to_string_pretty(&project).unwrap();

        // Should contain key fields
        assert!(json.contains("Warehouse Extension"));
        assert!(json.contains("B-1"));
        assert!(json.contains("\"type\": \"Beam\""));

        // Roundtrip
        let roundtrip: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.meta.name, "Warehouse Extension");
        assert_eq!(roundtrip.item_count(), 1);
    }

    #[test]
    fn test_add_remove_item() {
        let mut project = Project::new("Test");

        let id = project.add_item(beam_item("B-1"));
        assert_eq!(project.item_count(), 1);
        assert!(project.get_item(&id).is_some());
        assert_eq!(project.get_item(&id).map(|item| item.label.as_str()), Some("B-1"));

        let removed = project.remove_item(&id);
        assert!(removed.is_some());
        assert_eq!(project.item_count(), 0);
        assert!(project.remove_item(&id).is_none());
    }

    #[test]
    fn test_stored_item_still_evaluates() {
        let mut project = Project::new("Test");
        let id = project.add_item(beam_item("B-1"));

        let item = project.get_item(&id).unwrap();
        let output = evaluate(&item.input).unwrap();
        assert_eq!(output.calc_type(), "Beam");
    }

    #[test]
    fn test_units_system_serialization() {
        let units = UnitsSystem::Imperial;
        let json = serde_json::to_string(&units).unwrap();
        assert_eq!(json, "\"Imperial\"");

        let roundtrip: UnitsSystem = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, UnitsSystem::Imperial);
    }

    #[test]
    fn test_modified_timestamp_advances() {
        let mut project = Project::new("Test");
        let created = project.meta.modified;
        project.add_item(beam_item("B-1"));
        assert!(project.meta.modified >= created);
    }
}
