//! utilkit CLI - Command-line tools for sprite clip catalogs

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{constants, simulate, validate};

#[derive(Parser)]
#[command(name = "utilkit")]
#[command(about = "Validate, simulate and generate constants for sprite clip catalogs", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a clip catalog and print derived timings
    Validate {
        /// Path to a .clips.toml catalog
        catalog: String,
    },

    /// Tick a clip headlessly and print the frame/trigger/completion timeline
    Simulate {
        /// Path to a .clips.toml catalog
        catalog: String,

        /// Clip name to play
        clip: String,

        /// Seconds per tick
        #[arg(long, default_value = "0.25")]
        dt: f64,

        /// Number of ticks to run
        #[arg(long, default_value = "16")]
        ticks: usize,

        /// Frame to start from
        #[arg(long, default_value = "0")]
        start_frame: usize,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Generate a Rust module of clip name and index constants
    Constants {
        /// Path to a .clips.toml catalog
        catalog: String,

        /// Output file (prints to stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { catalog } => validate::run(&catalog),
        Commands::Simulate {
            catalog,
            clip,
            dt,
            ticks,
            start_frame,
            format,
        } => simulate::run(simulate::SimulateArgs {
            catalog,
            clip,
            dt,
            ticks,
            start_frame,
            format,
        }),
        Commands::Constants { catalog, output } => constants::run(&catalog, output.as_deref()),
    }
}
