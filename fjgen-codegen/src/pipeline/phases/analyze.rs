//! Analyze phase - computes shared data from the declarations.

use eyre::Result;

use crate::{
    analysis::{ComputedData, lens_types},
    pipeline::{CompilationContext, Phase},
};

/// Phase that computes shared analysis data from the declarations.
///
/// This phase must run after `LowerPhase` as it requires the declarations to
/// be populated. Besides computing [`ComputedData`], it tells every spec which
/// other declared types carry a generated lens, so that fields of those types
/// get a typed sub-lens instead of a generic object lens.
pub struct AnalyzePhase;

impl Phase for AnalyzePhase {
    fn name(&self) -> &'static str {
        "analyze"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let ir = ctx
            .ir
            .as_mut()
            .ok_or_else(|| eyre::eyre!("declarations not set - AnalyzePhase must run after LowerPhase"))?;

        let lens = lens_types(ir);
        for spec in &mut ir.structs {
            link_lens_types(&mut spec.types_with_lens, &lens);
        }
        for spec in &mut ir.choices {
            link_lens_types(&mut spec.types_with_lens, &lens);
        }

        let computed = ComputedData::from_ir(ir);
        tracing::debug!(
            types = computed.type_count(),
            lens_types = computed.lens_types.len(),
            "analyzed declarations"
        );
        ctx.computed = Some(computed);
        Ok(())
    }
}

fn link_lens_types(types_with_lens: &mut Vec<String>, lens: &std::collections::BTreeSet<String>) {
    for name in lens {
        if !types_with_lens.contains(name) {
            types_with_lens.push(name.clone());
        }
    }
}
