//! Shared code generation utilities for the fjgen Java value-type generator.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, Lines)
//! - [`generation`] - Output management (ImportCollector)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, NamingConvention)
//! - [`pipeline`] - Compilation phases from manifest to linked declarations
//! - [`analysis`] - Data computed once from the declarations

pub mod analysis;
pub mod builder;
pub mod generation;
pub mod language;
pub mod pipeline;
