//! Mode selection and three-layer filesystem assembly.
//!
//! Two mutually exclusive entry operations mirror the two invocation
//! shapes: [`load_file_meta`] resolves a single entry file (standalone
//! mode) and [`load_program_meta`] resolves a package path (standard
//! library or project mode). The mode is fixed once per call; there are
//! no intra-call transitions.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, trace};

use crate::config::Config;
use crate::embed::scan_embeds;
use crate::error::Result;
use crate::manifest::{Manifest, ManifestPackage, MAIN_PKG};
use crate::source::{self, SourceInput};
use crate::stdlib;
use crate::vfs::{Layer, PkgVfs};

/// Resolve a single entry file into its manifest and filesystem layers.
///
/// The app layer holds the entry file keyed by its base name plus every
/// embed-declared resource that is readable next to it; an unreadable
/// embed is dropped, never an error. The vendor layer is anchored at the
/// manifest root only when the content came from disk; inline source has
/// no real project root to anchor it, so vendor stays empty.
pub fn load_file_meta(
    cfg: &Config,
    filename: &Path,
    input: SourceInput,
) -> Result<(Manifest, PkgVfs)> {
    trace!(?filename, ?input, "loading file meta");

    let inline = input.is_inline();
    let src = source::materialize(filename, input)?;

    let manifest = resolve_standalone_manifest(filename);
    debug!(root = %manifest.root, pkg = %manifest.pkg.name, "standalone manifest resolved");

    let entry_dir = filename.parent().unwrap_or(Path::new("."));
    let embeds = scan_embeds(&src);

    let mut files = BTreeMap::new();
    files.insert(base_name(filename), src);
    for name in embeds {
        match fs::read(anchored(entry_dir, &name)) {
            Ok(data) => {
                files.insert(name, data);
            }
            Err(err) => trace!(embed = %name, %err, "embed resource skipped"),
        }
    }

    let vendor = if inline {
        Layer::Empty
    } else {
        Layer::Dir(Path::new(&manifest.root).join("vendor"))
    };

    let vfs = PkgVfs {
        app: Layer::Memory(files),
        std: std_layer(cfg),
        vendor,
    };
    Ok((manifest, vfs))
}

/// Resolve a package path into its manifest and filesystem layers.
///
/// Standard-library paths get a std-only filesystem; anything else is a
/// project rooted at its manifest, and a project without a manifest is a
/// hard error.
pub fn load_program_meta(cfg: &Config, app_path: &str) -> Result<(Manifest, PkgVfs)> {
    trace!(app_path, "loading program meta");

    let manifest = resolve_project_manifest(app_path)?;
    debug!(root = %manifest.root, pkg = %manifest.pkg.name, is_std = manifest.is_std, "project manifest resolved");

    if manifest.is_std {
        let vfs = PkgVfs {
            app: Layer::Empty,
            std: std_layer(cfg),
            vendor: Layer::Empty,
        };
        return Ok((manifest, vfs));
    }

    let root = Path::new(&manifest.root);
    let vfs = PkgVfs {
        app: Layer::Dir(root.join("src")),
        std: std_layer(cfg),
        vendor: Layer::Dir(root.join("vendor")),
    };
    Ok((manifest, vfs))
}

/// Resolve the manifest governing a single entry file. Never fails: a
/// missing or broken manifest falls back to the synthetic `__main__`
/// identity named after the entry file.
pub fn resolve_standalone_manifest(entry_path: &Path) -> Manifest {
    let dir = entry_path.parent().unwrap_or(Path::new("."));
    match Manifest::load(dir) {
        Ok(manifest) => manifest,
        Err(err) => {
            trace!(%err, "no usable manifest, synthesizing __main__");
            Manifest {
                root: MAIN_PKG.to_string(),
                main_pkg: MAIN_PKG.to_string(),
                is_std: false,
                pkg: ManifestPackage {
                    name: base_name(entry_path),
                    pkgpath: MAIN_PKG.to_string(),
                },
            }
        }
    }
}

/// Resolve the manifest for a package path: the standard-library
/// registry is consulted first (no disk access), otherwise the manifest
/// must exist on disk and its absence is fatal.
pub fn resolve_project_manifest(app_path: &str) -> Result<Manifest> {
    if stdlib::is_std_pkg(app_path) {
        let name = app_path.rsplit('/').next().unwrap_or(app_path);
        return Ok(Manifest {
            root: String::new(),
            main_pkg: app_path.to_string(),
            is_std: true,
            pkg: ManifestPackage {
                name: name.to_string(),
                pkgpath: app_path.to_string(),
            },
        });
    }

    Manifest::load(Path::new(app_path))
}

/// True when `path` is a regular file whose case-insensitive extension
/// marks a primary Wa source
pub fn is_wa_file(path: &Path) -> bool {
    is_regular_with_ext(path, "wa")
}

/// True for the secondary `.wz` syntax. Classification only; content
/// semantics belong to downstream consumers.
pub fn is_wz_file(path: &Path) -> bool {
    is_regular_with_ext(path, "wz")
}

fn is_regular_with_ext(path: &Path, ext: &str) -> bool {
    let is_regular = path
        .symlink_metadata()
        .map(|m| m.is_file())
        .unwrap_or(false);
    is_regular
        && path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case(ext))
            .unwrap_or(false)
}

/// Resolve an embed declaration against the entry file's directory.
/// Root and parent components are discarded so the read can never
/// escape the entry directory, whatever the declaration says.
fn anchored(entry_dir: &Path, declared: &str) -> PathBuf {
    let rel: PathBuf = Path::new(declared)
        .components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .collect();
    entry_dir.join(rel)
}

fn std_layer(cfg: &Config) -> Layer {
    match &cfg.waroot {
        Some(root) => Layer::Dir(root.join("src")),
        None => stdlib::builtin_fs(),
    }
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
