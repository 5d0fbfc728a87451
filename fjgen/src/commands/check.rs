use std::process::ExitCode;

use clap::Args;
use eyre::Result;

use super::ManifestArg;
use crate::{
    ops,
    reports::{Console, Report},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub manifest: ManifestArg,
}

impl CheckCommand {
    pub fn run(&self) -> Result<ExitCode> {
        let Some(manifest) = self.manifest.load() else {
            return Ok(ExitCode::FAILURE);
        };

        let report = ops::check(&manifest, &self.manifest.path)?;
        report.render(&mut Console::stdio())?;

        Ok(if report.is_valid() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    }
}
