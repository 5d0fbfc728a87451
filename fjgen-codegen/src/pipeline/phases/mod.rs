//! Built-in pipeline phases.
//!
//! This module provides the standard phases that run in every pipeline:
//!
//! - [`LowerPhase`] - transforms the manifest into declarations
//! - [`ValidatePhase`] - runs lints over the declarations
//! - [`AnalyzePhase`] - computes shared data from the declarations

mod analyze;
mod lower;
mod validate;

pub use analyze::AnalyzePhase;
pub use lower::{LowerPhase, lower_manifest, resolve_type};
pub use validate::{
    DefaultPolicyLint, DuplicateNameLint, EmptyDeclarationLint, FieldNamingLint, Lint,
    ValidatePhase,
};
