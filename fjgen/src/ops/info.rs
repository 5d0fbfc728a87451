//! Info operation - declaration summary.

use std::path::Path;

use eyre::{Context, Result, bail};
use fjgen_codegen::pipeline::Pipeline;
use fjgen_manifest::Manifest;

use crate::reports::{InfoReport, Stats};

/// Lower and analyze the manifest, then summarize what generation would produce.
pub fn info(manifest: &Manifest, config_path: &Path) -> Result<InfoReport> {
    let mut ctx = Pipeline::new()
        .run(manifest.clone())
        .wrap_err("Pipeline failed")?;
    if ctx.has_errors() {
        bail!(
            "Validation failed with {} error(s); run `fjgen check` for details",
            ctx.error_count()
        );
    }
    let computed = ctx.take_computed()?;

    Ok(InfoReport {
        package: manifest.package.name.clone(),
        spec_package: manifest.package.spec_package().to_string(),
        config_path: std::fs::canonicalize(config_path)
            .unwrap_or_else(|_| config_path.to_path_buf()),
        stats: Stats {
            structs: computed.struct_names.len(),
            choices: computed.choice_names.len(),
            fields: computed.field_count,
            cases: computed.case_count,
            builders: computed.builder_count,
            lenses: computed.lens_types.len(),
        },
        structs: computed.struct_names,
        choices: computed.choice_names,
        files: computed.files,
    })
}
