//! hexpath CLI
//!
//! Commands:
//! - play: run a game between two players (engine, random)
//! - bench: time the engine at increasing search depths

mod bench;
mod play;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hexpath")]
#[command(about = "Hex engine: alpha-beta search with a path-distance heuristic")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game between two players
    Play(play::PlayArgs),
    /// Benchmark best-move time at depths 1..=max
    Bench(bench::BenchArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play::run(args),
        Commands::Bench(args) => bench::run(args),
    }
}
