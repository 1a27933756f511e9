//! # Google Drive Provider
//!
//! Read-only access to Google Drive API v3 for the importer.
//!
//! ## Overview
//!
//! This crate provides:
//! - Bearer-authenticated file listing with continuation-token paging
//! - Single-node metadata lookup
//! - Depth-first subtree expansion that tags each file with its folder path

pub mod client;
pub mod error;
pub mod types;
pub mod walker;

pub use client::{DriveClient, FolderSource};
pub use error::{DriveError, Result};
pub use types::{DriveFile, FileList, FOLDER_MIME_TYPE};
pub use walker::{collect_files, FileEntry};
