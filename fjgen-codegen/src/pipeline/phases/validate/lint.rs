//! Lint trait for declaration validation.

use fjgen_ir::Declarations;

use crate::pipeline::Diagnostic;

/// One independent check over the declarations.
pub trait Lint {
    /// Kebab-case name, used in trace output.
    fn name(&self) -> &'static str;

    /// Append a diagnostic for every problem found.
    fn check(&self, ir: &Declarations, diagnostics: &mut Vec<Diagnostic>);
}
