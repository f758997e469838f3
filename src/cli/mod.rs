//! CLI module - argument parsing and command dispatch

pub mod commands;
pub mod helpers;
pub mod output;
pub mod viz;

use clap::{Parser, Subcommand};

pub use output::{OutputFormat, SeriesSelection};

#[derive(Parser, Debug)]
#[command(
    name = "odt",
    version,
    about = "Odds Distribution Toolkit - build and visualize probability-distribution scenarios as plain-text YAML files"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new scenario file
    New(commands::new::NewArgs),

    /// Add a component to a scenario
    Add(commands::add::AddArgs),

    /// Remove a component from a scenario by index
    #[command(name = "rm")]
    Remove(commands::rm::RemoveArgs),

    /// Switch a component's distribution family to its defaults
    SetKind(commands::set_kind::SetKindArgs),

    /// Show a scenario's components and computed summary
    Show(commands::show::ShowArgs),

    /// Compute density series and export them
    Compute(commands::compute::ComputeArgs),

    /// Validate scenario files
    Validate(commands::validate::ValidateArgs),
}
