//! Compilation pipeline for code generation.
//!
//! [`Pipeline`] takes a manifest (or already-built declarations) through
//! lower → validate → analyze. Lint findings are collected as
//! [`Diagnostic`]s in the [`CompilationContext`]; a run with errors stops
//! after validation and leaves no computed data behind.
//!
//! # Example
//!
//! ```ignore
//! use fjgen_codegen::pipeline::Pipeline;
//!
//! let mut ctx = Pipeline::new().run(manifest)?;
//! for diag in &ctx.diagnostics {
//!     eprintln!("{}", diag);
//! }
//! if !ctx.has_errors() {
//!     let generator = Generator::from_context(&mut ctx)?;
//! }
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use runner::Pipeline;
