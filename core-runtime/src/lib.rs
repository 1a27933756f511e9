//! # Core Runtime Module
//!
//! Provides foundational runtime infrastructure for the importer:
//! - Configuration resolved from the process environment
//! - Logging and tracing infrastructure
//!
//! ## Overview
//!
//! This crate contains the process-level utilities the other crates depend
//! on. It establishes the configuration and logging conventions used
//! throughout the importer.

pub mod config;
pub mod error;
pub mod logging;

pub use config::ImporterConfig;
pub use error::{Error, Result};
pub use logging::{init_logging, LogFormat, LoggingConfig};
