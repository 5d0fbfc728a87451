use std::process::ExitCode;

use clap::Args;
use eyre::{Context, Result};

use super::ManifestArg;
use crate::{
    ops,
    reports::{Console, Report},
};

#[derive(Args)]
pub struct InfoCommand {
    #[command(flatten)]
    pub manifest: ManifestArg,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl InfoCommand {
    pub fn run(&self) -> Result<ExitCode> {
        let Some(manifest) = self.manifest.load() else {
            return Ok(ExitCode::FAILURE);
        };

        let report = ops::info(&manifest, &self.manifest.path)?;
        if self.json {
            let json = serde_json::to_string_pretty(&report).wrap_err("Failed to serialize report")?;
            println!("{}", json);
        } else {
            report.render(&mut Console::stdio())?;
        }
        Ok(ExitCode::SUCCESS)
    }
}
