//! `fjgen.toml` parsing and validation.
//!
//! Parse errors and naming problems are reported as [`miette`] diagnostics
//! pointing into the original file.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod decl;
mod error;
mod manifest;
mod type_expr;

pub use decl::{CaseDecl, ChoiceDecl, FieldDecl, StructDecl};
pub use error::{Error, Problem, Result};
pub use manifest::{JAVA_KEYWORDS, Manifest, PackageConfig, ParseContext, is_java_keyword};
pub use type_expr::{TypeExpr, TypeExprError};
