//! Type and schema model for the fjgen Java value-type generator.
//!
//! This crate holds the declarative inputs consumed by the Java emitters:
//! the structural [`Type`] model, struct fields ([`Getter`]), choice cases
//! ([`Case`], [`CaseParam`]) and the generation requests ([`SourceSpec`],
//! [`ChoiceSpec`]).
//!
//! # Architecture
//!
//! ```text
//! fjgen.toml → fjgen-manifest (parsing) → fjgen-ir (schema model) → fjgen-java (emission)
//! ```
//!
//! Every value here is immutable once built; "with"-style methods return
//! new instances.

mod choice;
mod declarations;
mod error;
mod getter;
mod naming;
mod spec;
mod types;

pub use choice::{Case, CaseParam, ChoiceSpec};
pub use declarations::Declarations;
pub use error::SpecError;
pub use getter::{DefaultValue, Getter};
pub use naming::with_qualified_names;
pub use spec::{Configurations, SourceKind, SourceSpec};
pub use types::{Type, TypeShape, Variance, packages};
