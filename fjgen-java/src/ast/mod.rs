//! Java declaration model: fields, methods, constructors and classes.
//!
//! Builders assemble these nodes; rendering goes through
//! [`CodeBuilder`](fjgen_codegen::builder::CodeBuilder) via [`Renderable`](fjgen_codegen::builder::Renderable),
//! and every node reports the types it references so imports can be derived.

mod class;
mod constructor;
mod data_object;
mod field;
mod method;
mod modifiers;

pub use class::{ClassKind, ClassSpec};
pub use constructor::GenConstructor;
pub use data_object::DataObjectSpec;
pub use field::GenField;
pub use method::{GenMethod, GenParam};
pub use modifiers::{Accessibility, Concrete, Modifiability, Scope};
