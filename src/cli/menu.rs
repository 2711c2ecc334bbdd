// src/cli/menu.rs
use inquire::{InquireError, Password, PasswordDisplayMode, Select, Text};
use std::fmt;
use thiserror::Error;

use crate::core::Config;
use crate::generators::{GeneratorError, PasswordGenerator};
use crate::models::GenerationRequest;
use crate::strength::analyze_password_strength;
use crate::utils::{criterion_label, format_numbered, format_report};

const AFFIRMATIVE: [&str; 5] = ["s", "sim", "y", "yes", ""];

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("Prompt failed: {0}")]
    Prompt(#[from] InquireError),

    #[error(transparent)]
    Generator(#[from] GeneratorError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Custom,
    Quick,
    Strong,
    Batch,
    Analyze,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::Custom,
        MenuChoice::Quick,
        MenuChoice::Strong,
        MenuChoice::Batch,
        MenuChoice::Analyze,
        MenuChoice::Exit,
    ];

    pub fn number(&self) -> usize {
        match self {
            MenuChoice::Custom => 1,
            MenuChoice::Quick => 2,
            MenuChoice::Strong => 3,
            MenuChoice::Batch => 4,
            MenuChoice::Analyze => 5,
            MenuChoice::Exit => 6,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            MenuChoice::Custom => "Generate custom password",
            MenuChoice::Quick => "Generate quick password",
            MenuChoice::Strong => "Generate strong password",
            MenuChoice::Batch => "Generate multiple passwords",
            MenuChoice::Analyze => "Analyze password strength",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.title())
    }
}

/// Empty input or any of `s`, `sim`, `y`, `yes` (any case) counts as yes.
pub fn is_affirmative(input: &str) -> bool {
    AFFIRMATIVE.contains(&input.trim().to_lowercase().as_str())
}

/// Parse a count or length, falling back to `default` on empty or invalid input.
pub fn parse_number(input: &str, default: usize) -> usize {
    input.trim().parse().unwrap_or(default)
}

/// What the main loop does after the menu prompt returns.
#[derive(Debug, PartialEq, Eq)]
enum MenuStep {
    Run(MenuChoice),
    Redisplay,
    Exit,
    Interrupted,
}

fn next_step(selection: Result<Option<MenuChoice>, InquireError>) -> Result<MenuStep, MenuError> {
    match selection {
        Ok(Some(MenuChoice::Exit)) => Ok(MenuStep::Exit),
        Ok(Some(choice)) => Ok(MenuStep::Run(choice)),
        // Escape
        Ok(None) => Ok(MenuStep::Redisplay),
        Err(InquireError::OperationInterrupted) => Ok(MenuStep::Interrupted),
        Err(e) => Err(e.into()),
    }
}

// Only an interrupt at the pause ends the loop
fn interrupted_at_pause(result: &Result<String, InquireError>) -> bool {
    matches!(result, Err(InquireError::OperationInterrupted))
}

pub fn run_cli_menu(config: &Config, generator: &mut PasswordGenerator) -> Result<(), MenuError> {
    println!("╔══════════════════════════════════════╗");
    println!("║        🔐 SECURE PASSWORD GENERATOR   ║");
    println!("╚══════════════════════════════════════╝");

    loop {
        let selection = Select::new("Choose an option (1-6):", MenuChoice::ALL.to_vec())
            .with_help_message("Use arrow keys to navigate, Enter to select. Option 6 or Ctrl+C to exit.")
            .with_page_size(MenuChoice::ALL.len())
            .prompt_skippable();

        let choice = match next_step(selection)? {
            MenuStep::Run(choice) => choice,
            MenuStep::Redisplay => continue,
            MenuStep::Exit => {
                println!("\nThanks for using the password generator! 👋");
                break;
            }
            MenuStep::Interrupted => {
                println!("\n\nInterrupted by user.");
                break;
            }
        };

        log::debug!("Menu selection: {:?}", choice);

        match run_choice(choice, config, generator) {
            Ok(()) => {}
            Err(MenuError::Prompt(InquireError::OperationInterrupted)) => {
                println!("\n\nInterrupted by user.");
                break;
            }
            Err(MenuError::Prompt(InquireError::OperationCanceled)) => {
                println!("Cancelled.");
            }
            Err(e) => {
                log::error!("Menu action failed: {}", e);
                println!("\n❌ Error: {}", e);
            }
        }

        // Wait for user to press enter
        let pause = Text::new("Press Enter to continue...").prompt();
        if interrupted_at_pause(&pause) {
            println!("\n\nInterrupted by user.");
            break;
        }
    }

    Ok(())
}

fn run_choice(
    choice: MenuChoice,
    config: &Config,
    generator: &mut PasswordGenerator,
) -> Result<(), MenuError> {
    match choice {
        MenuChoice::Custom => {
            let request = prompt_request(config)?;
            let password = generator.generate_password(&request)?;
            println!("\n🔐 Your generated password: {}", password);
        }
        MenuChoice::Quick => {
            let request = GenerationRequest::with_length(config.quick_password_length);
            let password = generator.generate_password(&request)?;
            println!("\n🔐 Quick password: {}", password);
        }
        MenuChoice::Strong => {
            let request = GenerationRequest::with_length(config.strong_password_length);
            let password = generator.generate_password(&request)?;
            println!("\n🔐 Strong password: {}", password);
        }
        MenuChoice::Batch => {
            let count = Text::new(&format!(
                "How many passwords? (default: {}):",
                config.default_batch_count
            ))
            .prompt()?;
            let count = parse_number(&count, config.default_batch_count);

            let request = prompt_request(config)?;
            let passwords = generator.generate_many(count, &request)?;

            println!("\n🔐 Your {} passwords:", count);
            println!("{}", format_numbered(&passwords));
        }
        MenuChoice::Analyze => {
            let password = Password::new("Password to analyze:")
                .with_display_mode(PasswordDisplayMode::Masked)
                .without_confirmation()
                .prompt()?;

            if !password.is_empty() {
                let report = analyze_password_strength(&password);
                println!("\n📊 Password analysis:");
                print!("{}", format_report(&report));

                let missing = report.failed_criteria();
                if !missing.is_empty() {
                    let labels: Vec<String> = missing.iter().map(|name| criterion_label(name)).collect();
                    println!("\n💡 To improve: {}", labels.join(", "));
                }
            }
        }
        MenuChoice::Exit => {}
    }

    Ok(())
}

fn prompt_request(config: &Config) -> Result<GenerationRequest, MenuError> {
    println!("\nPassword settings:");

    let length = Text::new(&format!(
        "Password length (default: {}):",
        config.default_password_length
    ))
    .prompt()?;

    let include_uppercase = prompt_yes_no("Include uppercase letters?")?;
    let include_digits = prompt_yes_no("Include digits?")?;
    let include_symbols = prompt_yes_no("Include symbols?")?;

    Ok(GenerationRequest {
        length: parse_number(&length, config.default_password_length),
        include_uppercase,
        include_digits,
        include_symbols,
    })
}

fn prompt_yes_no(message: &str) -> Result<bool, MenuError> {
    let answer = Text::new(&format!("{} (y/n, default: y):", message)).prompt()?;
    Ok(is_affirmative(&answer))
}
