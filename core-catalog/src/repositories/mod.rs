//! # Repository Pattern Implementation
//!
//! Repository traits and PostgreSQL implementations for catalog writes.
//!
//! ## Architecture
//!
//! - Traits define the interface for each repository, so the import pipeline
//!   can run against in-memory fakes in tests
//! - PostgreSQL implementations use sqlx for async database access
//! - The only write operation is the upsert: rows are inserted or refreshed
//!   by natural key, never duplicated and never deleted
//!
//! ## Available Repositories
//!
//! - `CourseRepository` - Courses keyed by their normalized code
//! - `MaterialRepository` - Materials keyed by the provider's file id

pub mod course;
pub mod material;

pub use course::{CourseRepository, PgCourseRepository};
pub use material::{MaterialRepository, PgMaterialRepository};
