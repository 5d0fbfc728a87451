use std::{path::PathBuf, process::ExitCode};

use clap::Args;
use eyre::{Context, Result};
use fjgen_core::{File, FileRules, Overwrite, WriteResult};

/// Starter declarations: one struct and one choice.
const STARTER: &str = r#"[package]
name = "{package}"

[structs.Car]
fields = [
    { name = "make", type = "String" },
    { name = "year", type = "int" },
    { name = "color", type = "String", nullable = true, default = "null" },
]

[choices.ResultStatus]
cases = [
    { name = "Accepted", params = [{ name = "newData", type = "String" }] },
    { name = "Failed", params = [{ name = "problem", type = "Exception" }] },
]
"#;

#[derive(Args)]
pub struct InitCommand {
    /// Java package for the generated types
    #[arg(default_value = "com.example")]
    pub package: String,

    /// Where to create the manifest
    #[arg(short, long, default_value = "fjgen.toml")]
    pub config: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<ExitCode> {
        let content = STARTER.replace("{package}", &self.package);
        let result = File::new(&self.config, content)
            .with_rules(FileRules {
                overwrite: Overwrite::IfMissing,
            })
            .write()
            .wrap_err("Failed to create manifest")?;

        match result {
            WriteResult::Skipped => {
                println!("{} already exists, leaving it alone", self.config.display());
            }
            _ => {
                println!("Created {}", self.config.display());
                println!();
                println!("Next steps:");
                println!("  fjgen check");
                println!("  fjgen generate");
            }
        }
        Ok(ExitCode::SUCCESS)
    }
}
