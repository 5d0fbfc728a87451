//! Compilation context passed through pipeline phases.

use eyre::{Result, eyre};
use fjgen_ir::Declarations;
use fjgen_manifest::Manifest;

use super::diagnostic::{Diagnostic, Severity};
use crate::analysis::ComputedData;

/// Context passed through all pipeline phases.
///
/// This struct carries the state of compilation through each phase,
/// accumulating results and diagnostics along the way.
#[derive(Debug)]
pub struct CompilationContext {
    /// The manifest being compiled, when the declarations came from a file.
    pub manifest: Option<Manifest>,
    /// The declarations to generate (populated by LowerPhase, or given directly).
    pub ir: Option<Declarations>,
    /// Pre-computed analysis data (populated by AnalyzePhase).
    pub computed: Option<ComputedData>,
    /// Diagnostics collected during compilation.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    /// Create a new compilation context from a manifest.
    pub fn new(manifest: Manifest) -> Self {
        Self {
            manifest: Some(manifest),
            ir: None,
            computed: None,
            diagnostics: Vec::new(),
        }
    }

    /// Create a context for declarations built through the API.
    pub fn from_ir(ir: Declarations) -> Self {
        Self {
            manifest: None,
            ir: Some(ir),
            computed: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity == Severity::Warning)
    }

    /// Take the declarations out of the context.
    ///
    /// # Errors
    ///
    /// Fails if the declarations have not been set (LowerPhase hasn't run).
    pub fn take_ir(&mut self) -> Result<Declarations> {
        self.ir
            .take()
            .ok_or_else(|| eyre!("declarations not set - did LowerPhase run?"))
    }

    /// Take the computed data out of the context.
    ///
    /// # Errors
    ///
    /// Fails if computed data has not been set (AnalyzePhase hasn't run).
    pub fn take_computed(&mut self) -> Result<ComputedData> {
        self.computed
            .take()
            .ok_or_else(|| eyre!("computed data not set - did AnalyzePhase run?"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_manifest() -> Manifest {
        "[package]\nname = \"com.example\"\n"
            .parse()
            .expect("Failed to parse test manifest")
    }

    #[test]
    fn test_context_creation() {
        let ctx = CompilationContext::new(make_test_manifest());

        assert!(ctx.manifest.is_some());
        assert!(ctx.ir.is_none());
        assert!(ctx.computed.is_none());
        assert!(ctx.diagnostics.is_empty());
    }

    #[test]
    fn test_context_from_ir() {
        let mut ctx = CompilationContext::from_ir(Declarations::new());

        assert!(ctx.manifest.is_none());
        assert!(ctx.take_ir().is_ok());
        assert!(ctx.take_ir().is_err());
        assert!(ctx.take_computed().is_err());
    }

    #[test]
    fn test_context_diagnostics() {
        let mut ctx = CompilationContext::new(make_test_manifest());
        assert!(!ctx.has_errors());

        ctx.diagnostics.push(Diagnostic::warning("validate", "no fields"));
        assert!(!ctx.has_errors());

        ctx.diagnostics.push(Diagnostic::error("validate", "no cases"));
        ctx.diagnostics.push(Diagnostic::error("validate", "duplicate case"));
        assert!(ctx.has_errors());
        assert_eq!(ctx.error_count(), 2);
        let warnings: Vec<&str> = ctx.warnings().map(|d| d.message.as_str()).collect();
        assert_eq!(warnings, vec!["no fields"]);
    }
}
