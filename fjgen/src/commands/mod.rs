mod check;
mod completions;
mod generate;
mod info;
mod init;

use std::{path::PathBuf, process::ExitCode};

use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use fjgen_manifest::Manifest;
use generate::GenerateCommand;
use info::InfoCommand;
use init::InitCommand;

#[derive(Parser)]
#[command(name = "fjgen")]
#[command(version)]
#[command(about = "Generate immutable Java value types from TOML declarations")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<ExitCode> {
        match &self.command {
            Commands::Init(cmd) => cmd.run(),
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Info(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter fjgen.toml
    Init(InitCommand),

    /// Generate Java sources from fjgen.toml
    Generate(GenerateCommand),

    /// Validate fjgen.toml without generating code
    Check(CheckCommand),

    /// Show declared types and what will be generated
    Info(InfoCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// The declaration file read by `generate`, `check` and `info`.
#[derive(Args)]
pub(crate) struct ManifestArg {
    /// Path to fjgen.toml
    #[arg(short, long = "config", default_value = "fjgen.toml")]
    pub path: PathBuf,
}

impl ManifestArg {
    /// Loads the manifest. Read and declaration errors are printed with
    /// their source excerpt, and `None` is returned.
    pub fn load(&self) -> Option<Manifest> {
        match Manifest::from_file(&self.path) {
            Ok(manifest) => Some(manifest),
            Err(err) => {
                tracing::debug!(path = %self.path.display(), "manifest rejected");
                eprintln!("{:?}", miette::Report::new(*err));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_config_defaults_to_fjgen_toml() {
        let cli = Cli::try_parse_from(["fjgen", "check"]).unwrap();
        match cli.command {
            Commands::Check(cmd) => assert_eq!(cmd.manifest.path, PathBuf::from("fjgen.toml")),
            _ => panic!("expected check"),
        }
    }

    #[test]
    fn test_load_reports_invalid_manifest_as_none() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("fjgen.toml");
        std::fs::write(&path, "[package]\nname = \"com.1example\"\n").unwrap();

        assert!(ManifestArg { path: path.clone() }.load().is_none());
        assert!(
            ManifestArg {
                path: temp.path().join("missing.toml")
            }
            .load()
            .is_none()
        );

        std::fs::write(&path, "[package]\nname = \"com.example\"\n").unwrap();
        let manifest = ManifestArg { path }.load().unwrap();
        assert_eq!(manifest.package.name, "com.example");
    }
}
