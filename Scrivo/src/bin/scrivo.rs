use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "scrivo", version)]
#[command(about = "A small plain-text editor", long_about = None)]
struct Cli {
    /// File to open at startup
    file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging (RUST_LOG overrides the default level)
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let initial_file = cli
        .file
        .map(|file| {
            std::path::absolute(&file)
                .with_context(|| format!("Invalid path: {}", file.display()))
        })
        .transpose()?;

    scrivo::gui::run_app(initial_file);

    Ok(())
}
