//! Bitcrush CLI - run audio files through the bitcrusher plugin.

mod commands;
mod wav;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bitcrush")]
#[command(author, version, about = "Bitcrusher command-line host", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a WAV file through the bitcrusher
    Process(commands::process::ProcessArgs),

    /// Show the plugin descriptor and its ports
    Info(commands::info::InfoArgs),

    /// List factory presets or print one as TOML
    Presets(commands::presets::PresetsArgs),
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays clean for preset TOML.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Process(args) => commands::process::run(args),
        Commands::Info(args) => commands::info::run(&args),
        Commands::Presets(args) => commands::presets::run(&args),
    }
}
