//! Core utilities for Helio build tools
//!
//! This crate provides shared functionality used across the Android build
//! tooling:
//!
//! - **Error handling**: structured errors with codes, context, and recovery
//!   suggestions
//! - **Configuration**: TOML-based codegen job configuration with validation
//! - **File scanning**: file discovery with filtering
//!
//! # Example
//!
//! ```rust,no_run
//! use helio_core::config::Config;
//!
//! let config = Config::load(None).expect("invalid configuration");
//! for job in &config.schema.codegen.jobs {
//!     println!("{}: {} -> {}", job.name, job.script.display(), job.template.display());
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod file_scanner;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{CodegenConfig, CodegenJob, Config, ConfigSchema};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
    pub use crate::file_scanner::FileScanner;
}
