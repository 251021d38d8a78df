//! CLI application for Colombian payment QR processing.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{decode, r#gen};

/// Payment QR toolkit - decode merchant-presented payloads, generate QR images
#[derive(Parser)]
#[command(name = "qrpago")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a payment QR payload
    Decode(decode::DecodeArgs),

    /// Generate a QR image from arbitrary data
    Gen(r#gen::GenArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Execute command
    match cli.command {
        Commands::Decode(args) => decode::run(args, cli.config.as_deref()),
        Commands::Gen(args) => r#gen::run(args, cli.config.as_deref()),
    }
}
