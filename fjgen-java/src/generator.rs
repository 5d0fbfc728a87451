use std::path::Path;

use eyre::Result;
use fjgen_codegen::{
    language::{GenerateResult, LanguageCodegen, PreviewFile},
    pipeline::CompilationContext,
};
use fjgen_core::{GeneratedFile, WriteResult};
use fjgen_ir::Declarations;

use crate::{ChoiceBuilder, JavaFile, StructBuilder};

/// Java code generator: one source file per declared struct or choice.
pub struct Generator {
    decls: Declarations,
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "java"
    }

    fn file_extension(&self) -> &'static str {
        "java"
    }

    fn preview(&self) -> Result<Vec<PreviewFile>> {
        Ok(self
            .files()?
            .into_iter()
            .map(|file| PreviewFile {
                path: file.relative_path().display().to_string(),
                content: file.render(),
            })
            .collect())
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let files = self.files()?;
        let mut result = GenerateResult::default();
        for file in &files {
            let path = file.relative_path().display().to_string();
            match file.write(output_dir)? {
                WriteResult::Written => result.written.push(path),
                WriteResult::Unchanged => result.unchanged.push(path),
                WriteResult::Skipped => result.skipped.push(path),
            }
        }
        tracing::info!(
            written = result.written.len(),
            unchanged = result.unchanged.len(),
            skipped = result.skipped.len(),
            "generated java sources"
        );
        Ok(result)
    }
}

impl Generator {
    pub fn new(decls: Declarations) -> Self {
        Self { decls }
    }

    /// Take the linked declarations out of a finished pipeline run.
    pub fn from_context(ctx: &mut CompilationContext) -> Result<Self> {
        Ok(Self::new(ctx.take_ir()?))
    }

    pub fn declarations(&self) -> &Declarations {
        &self.decls
    }

    /// Build every declaration, structs first. Stops at the first failure.
    pub fn files(&self) -> Result<Vec<JavaFile>> {
        let structs = self
            .decls
            .structs
            .iter()
            .map(|spec| StructBuilder::new(spec).emit());
        let choices = self
            .decls
            .choices
            .iter()
            .map(|spec| ChoiceBuilder::new(spec).emit());
        structs.chain(choices).collect()
    }
}
