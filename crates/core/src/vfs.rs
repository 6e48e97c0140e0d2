//! The three-layer virtual filesystem handed to the compilation pipeline.
//!
//! Each layer is an independent read-only view keyed by slash-separated
//! relative path. Which layer wins when an import could match more than
//! one is the import resolver's contract, not decided here.

use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;

/// A single read-only filesystem view
#[derive(Debug, Clone, Default)]
pub enum Layer {
    /// Nothing resolvable
    #[default]
    Empty,
    /// In-memory store keyed by relative path
    Memory(BTreeMap<String, Vec<u8>>),
    /// Directory-backed store rooted at a local path, read lazily
    Dir(PathBuf),
}

impl Layer {
    /// Read the contents of a relative path
    pub fn read(&self, rel: &str) -> io::Result<Vec<u8>> {
        match self {
            Layer::Empty => Err(io::Error::new(io::ErrorKind::NotFound, rel.to_string())),
            Layer::Memory(files) => files
                .get(rel)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, rel.to_string())),
            Layer::Dir(root) => std::fs::read(root.join(rel)),
        }
    }

    /// True when a relative path currently resolves in this layer
    pub fn contains(&self, rel: &str) -> bool {
        match self {
            Layer::Empty => false,
            Layer::Memory(files) => files.contains_key(rel),
            Layer::Dir(root) => root.join(rel).is_file(),
        }
    }

    /// True when no path can resolve in this layer
    pub fn is_empty(&self) -> bool {
        match self {
            Layer::Empty => true,
            Layer::Memory(files) => files.is_empty(),
            Layer::Dir(root) => !root.is_dir(),
        }
    }
}

/// The three named views every later compilation stage consumes,
/// independent of how they were populated
#[derive(Debug, Clone, Default)]
pub struct PkgVfs {
    /// Entry/application code
    pub app: Layer,
    /// Standard library; never empty after assembly
    pub std: Layer,
    /// Vendored third-party dependencies
    pub vendor: Layer,
}
