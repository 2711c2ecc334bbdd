use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use std::path::Path;

mod cli;
mod core;
mod generators;
mod models;
mod strength;
mod utils;

use crate::cli::{Args, CliCommand};
use crate::core::Config;
use crate::generators::PasswordGenerator;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        config.log_level
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp_secs()
        .format_module_path(true)
        .target(env_logger::Target::Stderr)
        .init();

    log::debug!("Loaded config: {:?}", config);

    ctrlc::set_handler(move || {
        log::info!("Ctrl+C received, exiting");
        println!("\n\nInterrupted by user.");
        std::process::exit(0);
    })
    .context("Failed to set Ctrl+C handler")?;

    let mut generator = PasswordGenerator::new();

    let output = match args.command.unwrap_or(CliCommand::Menu) {
        CliCommand::Menu => {
            cli::menu::run_cli_menu(&config, &mut generator).context("Interactive menu failed")?;
            return Ok(());
        }
        CliCommand::Generate(options) => {
            let request = options.to_request(config.default_password_length);
            cli::handlers::handle_generate(&mut generator, &request, args.json)?
        }
        CliCommand::Quick => {
            let request = models::GenerationRequest::with_length(config.quick_password_length);
            cli::handlers::handle_generate(&mut generator, &request, args.json)?
        }
        CliCommand::Strong => {
            let request = models::GenerationRequest::with_length(config.strong_password_length);
            cli::handlers::handle_generate(&mut generator, &request, args.json)?
        }
        CliCommand::Batch { count, options } => {
            let request = options.to_request(config.default_password_length);
            let count = count.unwrap_or(config.default_batch_count);
            cli::handlers::handle_batch(&mut generator, count, &request, args.json)?
        }
        CliCommand::Analyze { password } => cli::handlers::handle_analyze(&password, args.json)?,
    };

    println!("{}", output);

    Ok(())
}
