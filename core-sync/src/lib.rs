//! # Import Orchestration Module
//!
//! Drives the end-to-end import of course materials from Google Drive.
//!
//! ## Overview
//!
//! This module walks a Drive folder tree whose first level holds department
//! folders and whose second level holds course folders, then:
//! - Infers course metadata from course folder names
//! - Collects every file beneath a course folder with its ancestor path
//! - Infers material metadata from file names and paths
//! - Upserts courses and materials through the catalog repositories
//!
//! The run is sequential and fail-fast; because all writes are keyed
//! upserts, an aborted run can simply be re-executed.

pub mod coordinator;
pub mod error;

pub use coordinator::{ImportCoordinator, ImportStats};
pub use error::{ImportError, Result};
