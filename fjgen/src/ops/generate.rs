//! Generate operation - Java sources from a manifest.

use std::path::Path;

use eyre::{Context, Result};
use fjgen_codegen::{language::LanguageCodegen, pipeline::Pipeline};
use fjgen_java::Generator;
use fjgen_manifest::Manifest;

use crate::reports::{GenerateReport, GenerationResult, PreviewFile, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Source root that package directories are created under.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Runs the pipeline and, when it reports no errors, emits one Java file per
/// declared type.
pub fn generate(manifest: &Manifest, opts: GenerateOptions) -> Result<GenerateReport> {
    let mut ctx = Pipeline::new()
        .run(manifest.clone())
        .wrap_err("Pipeline failed")?;

    let warnings: Vec<String> = ctx.warnings().map(|d| d.detail()).collect();
    let errors: Vec<String> = ctx.errors().map(|d| d.detail()).collect();
    let type_count = ctx.computed.as_ref().map_or(0, |c| c.type_count());

    if !errors.is_empty() {
        tracing::debug!(errors = errors.len(), "skipping generation");
        return Ok(GenerateReport {
            package: manifest.package.name.clone(),
            type_count,
            warnings,
            result: GenerationResult::Failed(errors),
        });
    }

    let generator = Generator::from_context(&mut ctx)?;
    tracing::debug!(dry_run = opts.dry_run, output = %opts.output_dir.display(), "generating");
    let result = if opts.dry_run {
        let files = generator
            .preview()?
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(files)
    } else {
        let result = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to generate code")?;
        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            written: result.written,
            unchanged: result.unchanged,
        })
    };

    Ok(GenerateReport {
        package: manifest.package.name.clone(),
        type_count,
        warnings,
        result,
    })
}
