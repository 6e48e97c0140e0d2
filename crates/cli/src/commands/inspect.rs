use anyhow::{Context, Result};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::debug;

use wac_core::{loader, Config, Layer, Manifest, PkgVfs, SourceInput, MAIN_PKG};

pub fn inspect_command(path_arg: &str, waroot: Option<PathBuf>, json: bool) -> Result<()> {
    debug!("Inspecting: {}", path_arg);

    let cfg = Config { waroot };

    let path = Path::new(path_arg);
    let (manifest, vfs) = if loader::is_wa_file(path) || loader::is_wz_file(path) {
        wac_core::load_file_meta(&cfg, path, SourceInput::Absent)
            .with_context(|| format!("failed to resolve {}", path.display()))?
    } else {
        wac_core::load_program_meta(&cfg, path_arg)
            .with_context(|| format!("failed to resolve package {path_arg}"))?
    };

    if json {
        let report = json!({
            "manifest": manifest,
            "layers": {
                "app": describe(&vfs.app),
                "std": describe(&vfs.std),
                "vendor": describe(&vfs.vendor),
            },
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_summary(&manifest, &vfs);
    Ok(())
}

fn print_summary(manifest: &Manifest, vfs: &PkgVfs) {
    println!("package: {} ({})", manifest.pkg.name, manifest.pkg.pkgpath);
    if manifest.is_std {
        println!("kind:    standard library");
    } else if manifest.root == MAIN_PKG {
        println!("kind:    standalone file");
    } else {
        println!("kind:    project at {}", manifest.root);
    }
    println!("app:     {}", describe(&vfs.app));
    println!("std:     {}", describe(&vfs.std));
    println!("vendor:  {}", describe(&vfs.vendor));
}

fn describe(layer: &Layer) -> String {
    match layer {
        Layer::Empty => "(empty)".to_string(),
        Layer::Memory(files) => format!("{} in-memory file(s)", files.len()),
        Layer::Dir(root) => format!("directory {}", root.display()),
    }
}
