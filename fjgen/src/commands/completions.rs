use std::{io, path::PathBuf, process::ExitCode};

use clap::{Args, CommandFactory};
use clap_complete::Shell;
use eyre::{Context, Result, eyre};

use super::Cli;

#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for (defaults to the current $SHELL)
    shell: Option<Shell>,

    /// Write the completion script into this directory instead of stdout
    #[arg(long)]
    dir: Option<PathBuf>,
}

impl CompletionsCommand {
    pub fn run(&self) -> Result<ExitCode> {
        let shell = self.shell()?;
        let mut cmd = Cli::command();
        match &self.dir {
            Some(dir) => {
                let path = clap_complete::generate_to(shell, &mut cmd, "fjgen", dir)
                    .wrap_err_with(|| format!("Failed to write completions to {}", dir.display()))?;
                eprintln!("Wrote {}", path.display());
            }
            None => clap_complete::generate(shell, &mut cmd, "fjgen", &mut io::stdout()),
        }
        Ok(ExitCode::SUCCESS)
    }

    fn shell(&self) -> Result<Shell> {
        self.shell
            .or_else(Shell::from_env)
            .ok_or_else(|| eyre!("Could not detect the shell from $SHELL; pass it explicitly"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_script_into_dir() {
        let temp = tempfile::tempdir().unwrap();
        CompletionsCommand {
            shell: Some(Shell::Bash),
            dir: Some(temp.path().to_path_buf()),
        }
        .run()
        .unwrap();

        let script = std::fs::read_to_string(temp.path().join("fjgen.bash")).unwrap();
        assert!(script.contains("generate"));
        assert!(script.contains("--config"));
    }

    #[test]
    fn test_explicit_shell_wins() {
        let cmd = CompletionsCommand {
            shell: Some(Shell::Zsh),
            dir: None,
        };
        assert_eq!(cmd.shell().unwrap(), Shell::Zsh);
    }
}
