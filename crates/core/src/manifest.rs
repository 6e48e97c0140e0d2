//! Project identity descriptor and the on-disk `wa.mod` loader.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Manifest file name looked up when resolving a project
pub const MANIFEST_FILE: &str = "wa.mod";

/// Sentinel root/package path for single-file programs with no manifest
pub const MAIN_PKG: &str = "__main__";

/// The `[package]` identity of a compilation unit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ManifestPackage {
    /// Display name
    pub name: String,
    /// Canonical import path; defaults to the name when omitted on disk
    #[serde(default)]
    pub pkgpath: String,
}

/// Normalized project identity descriptor.
///
/// Constructed fresh on every resolution call, never mutated after
/// return and never cached. `root` is empty for standard-library
/// packages and the `__main__` sentinel for standalone files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Manifest {
    pub root: String,
    pub main_pkg: String,
    #[serde(default)]
    pub is_std: bool,
    pub pkg: ManifestPackage,
}

/// On-disk shape of a `wa.mod` file
#[derive(Debug, Deserialize)]
struct ManifestFile {
    package: ManifestPackage,
}

impl Manifest {
    /// Load the nearest `wa.mod` upward from `dir`.
    ///
    /// Whether a missing manifest is recoverable is the caller's call:
    /// standalone resolution swallows the error, project resolution
    /// surfaces it.
    pub fn load(dir: &Path) -> Result<Manifest> {
        let Some(found) = find_manifest_dir(dir) else {
            return Err(Error::ManifestRequired(dir.to_path_buf()));
        };

        let path = found.join(MANIFEST_FILE);
        let text = fs::read_to_string(&path)?;
        let file: ManifestFile = toml::from_str(&text).map_err(|e| Error::ManifestInvalid {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        let mut pkg = file.package;
        if pkg.pkgpath.is_empty() {
            pkg.pkgpath = pkg.name.clone();
        }

        Ok(Manifest {
            root: found.to_string_lossy().into_owned(),
            main_pkg: pkg.pkgpath.clone(),
            is_std: false,
            pkg,
        })
    }

    /// JSON rendering used for display and trace output
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

fn find_manifest_dir(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(MANIFEST_FILE).is_file() {
            return Some(current);
        }
        if !current.pop() {
            return None;
        }
    }
}
