//! Check command report.

use std::{
    io::{self, Write},
    path::PathBuf,
};

use fjgen_codegen::pipeline::Severity;

use super::console::{Console, Report};

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    pub config_path: PathBuf,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render<O: Write, E: Write>(&self, console: &mut Console<O, E>) -> io::Result<()> {
        for error in &self.errors {
            console.diagnostic(Severity::Error, error)?;
        }
        for warning in &self.warnings {
            console.diagnostic(Severity::Warning, warning)?;
        }

        if self.is_valid() {
            console.line(format_args!("✓ {} is valid", self.config_path.display()))?;
        } else {
            console.line(format_args!(
                "✗ {} has {} error(s)",
                self.config_path.display(),
                self.errors.len()
            ))?;
        }
        Ok(())
    }
}
