// src/cli/commands.rs
use clap::Subcommand;

use crate::models::GenerationRequest;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a password with custom options
    Generate(GenerateArgs),

    /// Generate a quick password (12 characters, all classes)
    Quick,

    /// Generate a strong password (16 characters, all classes)
    Strong,

    /// Generate several passwords with the same options
    Batch {
        /// Number of passwords to generate
        #[arg(short, long)]
        count: Option<usize>,

        #[command(flatten)]
        options: GenerateArgs,
    },

    /// Score the strength of a password
    Analyze {
        /// Password to analyze
        #[arg(required = true)]
        password: String,
    },

    /// Start the interactive menu
    Menu,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Password length (minimum 4)
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_digits: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,
}

impl GenerateArgs {
    pub fn to_request(&self, default_length: usize) -> GenerationRequest {
        GenerationRequest {
            length: self.length.unwrap_or(default_length),
            include_uppercase: !self.no_uppercase,
            include_digits: !self.no_digits,
            include_symbols: !self.no_symbols,
        }
    }
}
