//! Domain records for the course catalog
//!
//! These are write models: the importer only ever inserts or refreshes rows,
//! so the structs carry exactly the columns an upsert provides. Generated
//! ids and timestamps live in the database.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// ID Types
// =============================================================================

/// Unique identifier for a course row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(transparent)]
pub struct CourseId(pub i64);

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Write Models
// =============================================================================

/// A course candidate, keyed by `code`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    /// Natural key, uppercase with collapsed whitespace
    pub code: String,
    pub name: String,
    pub department: String,
    pub description: String,
}

/// A material candidate, keyed by `external_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMaterial {
    pub course_id: CourseId,
    pub title: String,
    /// Category slug ("exam", "quiz", "assignment", "notes", "solution", "other")
    pub material_type: String,
    pub semester: Option<String>,
    pub year: Option<i32>,
    pub file_url: String,
    pub file_name: String,
    pub file_size: Option<i64>,
    /// Originating provider, e.g. "google-drive"
    pub source: String,
    /// The provider's native file id
    pub external_id: String,
    pub metadata: MaterialMetadata,
}

/// Provider-side facts kept alongside a material, stored as a JSON column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialMetadata {
    /// Folder names between the course folder and the file
    pub path: Vec<String>,
    pub mime_type: String,
    pub drive_created_time: Option<String>,
    pub drive_modified_time: Option<String>,
}
