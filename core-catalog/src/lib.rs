//! # Course Catalog
//!
//! Owns the catalog schema and provides repositories for idempotent writes.
//!
//! ## Overview
//!
//! - PostgreSQL connection pooling and embedded migrations
//! - Course and material write models keyed by natural identifiers
//! - Upsert-only repositories: re-imports refresh rows, never duplicate them

pub mod db;
pub mod error;
pub mod models;
pub mod repositories;

pub use db::{create_pool, DatabaseConfig};
pub use error::{CatalogError, Result};
pub use models::{CourseId, MaterialMetadata, NewCourse, NewMaterial};
pub use repositories::{
    CourseRepository, MaterialRepository, PgCourseRepository, PgMaterialRepository,
};
