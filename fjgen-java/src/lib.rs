//! Java emitter for fjgen.
//!
//! Turns the declarations from `fjgen-ir` into Java sources that compile
//! against the FunctionalJ runtime:
//!
//! - structs become immutable final classes with withers, a staged builder,
//!   a lens and a map codec ([`StructBuilder`])
//! - choices become abstract classes with one nested final class per case,
//!   a `Tag` enum and a typed switch chain ([`ChoiceBuilder`])
//!
//! # Usage
//!
//! ```ignore
//! use fjgen_java::{Generator, LanguageCodegen};
//!
//! let generator = Generator::new(decls);
//! let result = generator.generate(Path::new("src/main/java"))?;
//! ```

mod choice_builder;
mod generator;
mod imports;
mod java_file;
mod lens;
mod runtime;
mod schema;
mod struct_builder;

pub mod ast;

pub use ast::DataObjectSpec;
pub use choice_builder::ChoiceBuilder;
pub use fjgen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use generator::Generator;
pub use imports::{ImportResolver, ResolvedNames};
pub use java_file::JavaFile;
pub use struct_builder::StructBuilder;
