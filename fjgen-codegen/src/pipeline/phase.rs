//! A step of the compilation pipeline.

use eyre::Result;

use super::CompilationContext;

/// One step from manifest to generator-ready declarations.
///
/// Problems with the declarations are recorded in the context as
/// diagnostics; an `Err` means the phase could not run at all, e.g. because
/// an earlier phase left nothing to work on.
pub trait Phase {
    /// Used for tracing spans.
    fn name(&self) -> &'static str;

    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;
}
