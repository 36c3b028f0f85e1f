#![forbid(unsafe_code)]

mod catalog;
mod cli;
mod codegen;
mod constants;
mod derived_color;
mod gui;
mod options;
mod settings;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

use catalog::Catalog;
use cli::{Cli, Commands};
use constants::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // --log-level wins over the environment variable
    let level_name = cli
        .log_level
        .clone()
        .or_else(|| std::env::var(logging::LEVEL_ENV).ok())
        .unwrap_or_else(|| logging::DEFAULT_LEVEL.to_string());

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli::parse_log_level(&level_name))
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let catalog = match &cli.catalog {
        Some(path) => Catalog::from_path(path),
        None => Catalog::embedded(),
    }
    .inspect_err(|err| error!("failed to load effect catalog: err={err:#}"))?;
    info!(effects = catalog.len(), "effect catalog ready");

    match cli.command.unwrap_or(Commands::Gui) {
        Commands::Gui => {
            // The catalog lives for the whole session and the settings state borrows from it
            let catalog: &'static Catalog = Box::leak(Box::new(catalog));
            gui::run_gui(catalog).context("Effect playground exited with an error")?;
        }
        Commands::List => print!("{}", cli::render_list(&catalog)),
        Commands::Generate(args) => println!("{}", cli::generate_snippet(&catalog, &args)?),
    }

    Ok(())
}
