//! HEXBOARD CLI - Command-line interface
//!
//! Commands:
//! - generate: Generate one or more balanced boards
//! - profiles: List the built-in distribution profiles

mod generate_cmd;
mod render;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hexboard_core::Profile;

#[derive(Parser)]
#[command(name = "hexboard")]
#[command(about = "Balanced board generator for hex-tile resource games")]
struct Cli {
    /// Random seed for reproducible boards
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log search progress (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate balanced boards
    Generate(generate_cmd::GenerateArgs),
    /// List available profiles
    Profiles,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Generate(args) => generate_cmd::run(args, cli.seed),
        Commands::Profiles => {
            list_profiles();
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn list_profiles() {
    for profile in Profile::ALL {
        let dist = profile.distribution();
        println!(
            "{:<16} {} - {} terrains, {} numbers",
            profile.name(),
            profile.description(),
            dist.terrains().len(),
            dist.numbers().len()
        );
    }
}
