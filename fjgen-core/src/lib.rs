//! Core utilities for the fjgen Java value-type generator.
//!
//! This crate provides the string helpers and file-writing primitives
//! shared by every other crate in the workspace.

mod file;
mod utils;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// String utilities
pub use utils::{
    capitalize, decapitalize, is_java_identifier, java_string_literal, to_camel_case,
    to_pascal_case,
};
