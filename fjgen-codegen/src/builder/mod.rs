//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Renders fragments into indented source text
//! - [`CodeFragment`] - Intermediate representation for code pieces
//! - [`Renderable`] - Trait for types that can be converted to code fragments
//! - [`Lines`] - Composable, restartable line sequences used for method bodies
//! - [`Indent`] - The indentation unit

mod code_builder;
mod indent;
mod lines;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use lines::Lines;
pub use renderable::{CodeFragment, Renderable};
