use std::{path::PathBuf, process::ExitCode};

use clap::Args;
use eyre::Result;

use super::ManifestArg;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Console, Report},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub manifest: ManifestArg,

    /// Source root the package directories are written under
    #[arg(short, long, default_value = "src/main/java")]
    pub output: PathBuf,

    /// Print the generated sources instead of writing them
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<ExitCode> {
        let Some(manifest) = self.manifest.load() else {
            return Ok(ExitCode::FAILURE);
        };

        let report = ops::generate(
            &manifest,
            GenerateOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut Console::stdio())?;

        Ok(if report.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    }
}
