//! # Metadata Inference
//!
//! Pure functions mapping folder and file names to structured course and
//! material attributes.
//!
//! ## Overview
//!
//! - Course code/name inference from course folder names
//! - Material classification by prioritized keyword groups
//! - Semester/year extraction
//! - Display title normalization
//!
//! Every function here is total and deterministic: identical names produce
//! identical attributes on every run, which is what makes re-imports
//! idempotent.

pub mod course;
pub mod material;
pub mod term;

pub use course::{infer_course, InferredCourse};
pub use material::{infer_material_type, normalize_title, MaterialType};
pub use term::{infer_term, Term};
