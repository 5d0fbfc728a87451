//! Built-in lints for declaration validation.

mod default_policy;
mod duplicate_name;
mod empty_declaration;
mod field_naming;

pub use default_policy::DefaultPolicyLint;
pub use duplicate_name::DuplicateNameLint;
pub use empty_declaration::EmptyDeclarationLint;
pub use field_naming::FieldNamingLint;
