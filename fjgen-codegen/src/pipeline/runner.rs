//! Pipeline orchestrator.

use eyre::Result;
use fjgen_ir::Declarations;
use fjgen_manifest::Manifest;

use super::{
    CompilationContext, Phase,
    phases::{AnalyzePhase, LowerPhase, ValidatePhase},
};

/// Runs lower → validate → analyze over one manifest.
///
/// Lint errors do not fail the run: they end it early, after the phase that
/// reported them, so callers can report every diagnostic at once. Only a
/// context without errors carries [`ComputedData`](crate::analysis::ComputedData).
pub struct Pipeline {
    validate: ValidatePhase,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            validate: ValidatePhase::new(),
        }
    }

    /// # Errors
    ///
    /// Fails when the manifest cannot be lowered, e.g. a field type that does
    /// not parse.
    pub fn run(&self, manifest: Manifest) -> Result<CompilationContext> {
        self.run_context(CompilationContext::new(manifest))
    }

    /// Run on declarations built through the API; lowering leaves them as-is.
    pub fn run_ir(&self, ir: Declarations) -> Result<CompilationContext> {
        self.run_context(CompilationContext::from_ir(ir))
    }

    fn run_context(&self, mut ctx: CompilationContext) -> Result<CompilationContext> {
        let phases: [&dyn Phase; 3] = [&LowerPhase, &self.validate, &AnalyzePhase];
        for phase in phases {
            let _span = tracing::debug_span!("phase", name = phase.name()).entered();
            phase.run(&mut ctx)?;
            tracing::debug!(diagnostics = ctx.diagnostics.len(), "phase complete");
            if ctx.has_errors() {
                tracing::debug!(errors = ctx.error_count(), "stopping on errors");
                break;
            }
        }
        Ok(ctx)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
