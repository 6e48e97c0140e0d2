use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Source resolution front end for the Wa toolchain
#[derive(Parser)]
#[command(name = "wac", version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Wac {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a source file or package path and show its manifest and layers
    Inspect {
        /// A .wa/.wz file, a project directory, or a standard-library path
        path: String,

        /// Standard-library root override
        #[arg(long = "waroot")]
        waroot: Option<PathBuf>,

        /// Show the manifest as JSON
        #[arg(short = 'j', long = "json")]
        json: bool,
    },
    /// Convert wat format to wasm binary format
    Wat2wasm {
        /// Input .wat file
        file: String,

        /// Set output file (defaults to <file>.wasm)
        #[arg(short = 'o', long = "output")]
        output: Option<String>,

        /// Keep debug names in the output
        #[arg(long = "debug-names")]
        debug_names: bool,
    },
}
