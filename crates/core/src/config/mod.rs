//! Configuration loading and schema definitions
//!
//! Codegen job configuration shared by the CLI and the generator.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
