//! Validate phase - runs lints on the declarations.

mod lint;
pub mod lints;

use eyre::{Result, eyre};
pub use lint::Lint;
pub use lints::{DefaultPolicyLint, DuplicateNameLint, EmptyDeclarationLint, FieldNamingLint};

use crate::pipeline::{CompilationContext, Phase};

/// Runs every lint over the declarations and records what they find.
///
/// Lint errors are diagnostics, not failures; the pipeline stops after this
/// phase when any were reported.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(FieldNamingLint),
                Box::new(DuplicateNameLint),
                Box::new(DefaultPolicyLint),
                Box::new(EmptyDeclarationLint),
            ],
        }
    }

    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let ir = ctx
            .ir
            .as_ref()
            .ok_or_else(|| eyre!("declarations not set - ValidatePhase must run after LowerPhase"))?;

        for lint in &self.lints {
            let before = ctx.diagnostics.len();
            lint.check(ir, &mut ctx.diagnostics);
            tracing::trace!(
                lint = lint.name(),
                found = ctx.diagnostics.len() - before,
                "lint done"
            );
        }
        Ok(())
    }
}
