mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Commands, Wac};

fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG env var
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let wac = Wac::parse();
    match wac.command {
        Commands::Inspect { path, waroot, json } => commands::inspect_command(&path, waroot, json),
        Commands::Wat2wasm {
            file,
            output,
            debug_names,
        } => commands::wat2wasm_command(&file, output.as_deref(), debug_names),
    }
}
