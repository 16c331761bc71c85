//! Shell completions command

use clap::CommandFactory;
use clap::ValueEnum;
use clap_complete::Shell;

use folio::error::{self, Result};

use crate::cli::{Cli, CompletionsArgs};

/// Parse a shell name, accepting `pwsh` for PowerShell
fn parse_shell(name: &str) -> Result<Shell> {
    let name = name.trim().to_lowercase();
    let name = if name == "pwsh" { "powershell" } else { name.as_str() };
    <Shell as ValueEnum>::from_str(name, true).map_err(|_| error::unknown_shell(name))
}

/// Write completions for `args.shell` to stdout
pub fn run(args: CompletionsArgs) -> Result<()> {
    let shell = parse_shell(&args.shell)?;
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, bin_name, &mut std::io::stdout().lock());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio::FolioError;

    #[test]
    fn test_parse_known_shells() {
        assert_eq!(parse_shell("bash").unwrap(), Shell::Bash);
        assert_eq!(parse_shell("Zsh").unwrap(), Shell::Zsh);
        assert_eq!(parse_shell("FISH").unwrap(), Shell::Fish);
        assert_eq!(parse_shell("elvish").unwrap(), Shell::Elvish);
        assert_eq!(parse_shell("pwsh").unwrap(), Shell::PowerShell);
    }

    #[test]
    fn test_parse_unknown_shell() {
        let err = parse_shell("tcsh").unwrap_err();
        assert!(matches!(err, FolioError::UnknownShell { .. }));
        assert!(err.to_string().contains("tcsh"));
    }

    #[test]
    fn test_completions_bash() {
        let args = CompletionsArgs {
            shell: "bash".to_string(),
        };
        assert!(run(args).is_ok());
    }
}
