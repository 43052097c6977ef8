//! YGAME CLI - Command-line interface
//!
//! Commands:
//! - serve: start the web server for the browser frontend
//! - board: inspect a board's topology and geometry from the terminal

use clap::{Parser, Subcommand};

mod inspect;
mod serve;

#[derive(Parser)]
#[command(name = "ygame")]
#[command(about = "Triangular hex connection game")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve(serve::ServeArgs),
    /// Print topology and geometry for a board size
    Board(inspect::BoardArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => serve::run(args),
        Commands::Board(args) => inspect::run(args),
    }
}
