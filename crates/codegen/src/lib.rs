//! Build-time Lua script embedding for the Helio Android SDK
//!
//! The Android build compiles no Lua: bootstrap scripts ride along inside
//! generated Java sources as string literals and are handed to the runtime's
//! interpreter at startup. This crate performs that generation step:
//!
//! 1. read a Lua script,
//! 2. escape it into a Java string-literal expression ([`escape`]),
//! 3. substitute it into a `.template` file ([`template`]),
//! 4. write the result under the generated-sources directory ([`generator`]).
//!
//! The Gradle build invokes the step before `compileJava`, adds the output
//! directory to the source set, and declares the script as a task input so
//! the artifact is regenerated whenever it changes.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod escape;
pub mod generator;
pub mod template;

pub use generator::{generate, GenerateOptions, GenerateOutcome};
