// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::CliCommand;

// Shown after --help; every variable is optional
const ENV_HELP: &str = "\
Optional environment overrides (also read from ./.env when present):
  PASSGEN_DEFAULT_LENGTH  custom/batch length (default 12)
  PASSGEN_QUICK_LENGTH    quick password length (default 12)
  PASSGEN_STRONG_LENGTH   strong password length (default 16)
  PASSGEN_BATCH_COUNT     passwords per batch (default 5)
  LOG_LEVEL               off|error|warn|info|debug|trace (default warn)";

#[derive(Parser, Debug)]
#[command(name = "passgen", author, version, about, long_about = None)]
#[command(after_help = ENV_HELP)]
pub struct Args {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to execute (interactive menu when omitted)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_help_lists_environment_overrides() {
        let help = Args::command().render_help().to_string();
        assert!(help.contains("Optional environment overrides"));
        assert!(help.contains("PASSGEN_STRONG_LENGTH"));
    }

    #[test]
    fn test_no_subcommand_means_menu() {
        let args = Args::try_parse_from(["passgen"]).unwrap();
        assert!(args.command.is_none());
        assert!(!args.json);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from(["passgen", "quick", "--json", "-v"]).unwrap();
        assert!(args.json);
        assert!(args.verbose);
        assert!(matches!(args.command, Some(CliCommand::Quick)));
    }
}
