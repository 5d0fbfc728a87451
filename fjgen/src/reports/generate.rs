//! Generate command report.

use std::{
    io::{self, Write},
    path::PathBuf,
};

use fjgen_codegen::pipeline::Severity;

use super::console::{Console, FileStatus, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Package of the generated classes.
    pub package: String,
    /// Number of declared structs and choices.
    pub type_count: usize,
    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,
    pub result: GenerationResult,
}

#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
    /// The pipeline reported errors; nothing was generated.
    Failed(Vec<String>),
}

#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    /// Files created or updated.
    pub written: Vec<String>,
    /// Files whose content was already up to date.
    pub unchanged: Vec<String>,
}

#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl GenerateReport {
    pub fn is_success(&self) -> bool {
        !matches!(self.result, GenerationResult::Failed(_))
    }
}

impl Report for GenerateReport {
    fn render<O: Write, E: Write>(&self, console: &mut Console<O, E>) -> io::Result<()> {
        for warning in &self.warnings {
            console.diagnostic(Severity::Warning, warning)?;
        }

        match &self.result {
            GenerationResult::Failed(errors) => {
                for error in errors {
                    console.diagnostic(Severity::Error, error)?;
                }
                console.line(format_args!(
                    "Generation aborted with {} error(s)",
                    errors.len()
                ))
            }
            // Sources only, so the output can be redirected to a file.
            GenerationResult::Preview(files) => {
                for file in files {
                    console.source(&file.path, &file.content)?;
                }
                Ok(())
            }
            GenerationResult::Written(written) => {
                console.heading(&self.package)?;
                console.row("Types", self.type_count)?;
                console.row("Output", written.output_dir.display())?;
                for file in &written.written {
                    console.file(FileStatus::Written, file)?;
                }
                for file in &written.unchanged {
                    console.file(FileStatus::Unchanged, file)?;
                }
                Ok(())
            }
        }
    }
}
