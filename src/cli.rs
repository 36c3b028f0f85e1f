//! Command line surface
//!
//! Without a subcommand the GUI is launched. `list` and `generate` drive the
//! same settings state headlessly and print to stdout.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing::Level;

use crate::catalog::Catalog;
use crate::constants::placeholder;
use crate::settings::SettingsManager;

#[derive(Debug, Parser)]
#[command(name = "effect-playground")]
#[command(about = "Configure click effects and generate the code that reproduces them")]
pub struct Cli {
    /// Read the effect catalog from this JSON file instead of the built-in one
    #[arg(long = "catalog", value_name = "PATH", global = true)]
    pub catalog: Option<PathBuf>,

    /// Max log level (overrides LOG_LEVEL)
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the configurator window (default)
    Gui,
    /// Print every effect and its properties
    List,
    /// Print the usage snippet for an effect
    Generate(GenerateArgs),
}

#[derive(Debug, Clone, Default, clap::Args)]
pub struct GenerateArgs {
    pub effect: String,
    /// Property edit, repeatable
    #[arg(long = "set", value_name = "NAME=VALUE")]
    pub set: Vec<String>,
    /// Derived color for dragMode, codeMode or confettiMode
    #[arg(long = "color")]
    pub color: Option<String>,
    /// Leave the particle options out of the snippet
    #[arg(long = "no-options")]
    pub no_options: bool,
}

/// Map a level name to a tracing level; unknown names fall back to info
pub fn parse_log_level(name: &str) -> Level {
    match name.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

pub fn render_list(catalog: &Catalog) -> String {
    let mut out = String::new();
    for effect in catalog.effects() {
        out.push_str(&effect.name);
        out.push('\n');
        for prop in &effect.properties {
            let optional = if prop.optional { " (optional)" } else { "" };
            out.push_str(&format!(
                "  {}: {}{} = {}",
                prop.name,
                prop.kind.label(),
                optional,
                prop.default
            ));
            if let Some(note) = &prop.note {
                out.push_str(&format!("  # {note}"));
            }
            out.push('\n');
        }
    }
    out
}

fn parse_assignment(raw: &str) -> Result<(&str, &str)> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name, value)),
        _ => bail!("expected NAME=VALUE, got '{raw}'"),
    }
}

/// Apply the arguments to a fresh settings state and render the snippet.
/// An effect missing from the catalog is an error carrying the code placeholder.
pub fn generate_snippet(catalog: &Catalog, args: &GenerateArgs) -> Result<String> {
    let assignments = args
        .set
        .iter()
        .map(|raw| parse_assignment(raw))
        .collect::<Result<Vec<_>>>()?;

    let mut settings = SettingsManager::new(catalog)?;
    settings.select_effect(&args.effect);
    for (name, value) in assignments {
        settings.set_property(name, value);
    }
    if let Some(color) = &args.color {
        settings.set_derived_color(&args.effect, color.as_str());
    }
    settings.set_apply_without_options(args.no_options);

    match settings.code_snippet() {
        Some(code) => Ok(code),
        None => bail!("{} (effect '{}' is not in the catalog)", placeholder::CODE, args.effect),
    }
}
