//! wac-core - source resolution front end for the Wa compiler toolchain
//!
//! This crate provides functionality to:
//! - Resolve a single file or a project directory into a normalized manifest
//! - Assemble the three-layer virtual filesystem (app, std, vendor) consumed
//!   by every later compilation stage
//! - Discover embed-declared auxiliary resources before any full parse exists
pub mod config;
pub mod embed;
pub mod error;
pub mod loader;
pub mod manifest;
pub mod source;
pub mod stdlib;
pub mod vfs;
pub mod wat2wasm;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use loader::{load_file_meta, load_program_meta};
pub use manifest::{Manifest, ManifestPackage, MAIN_PKG, MANIFEST_FILE};
pub use source::SourceInput;
pub use vfs::{Layer, PkgVfs};
