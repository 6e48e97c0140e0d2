use anyhow::{Context, Result};
use std::fs;
use tracing::debug;

use wac_core::wat2wasm::Wat2Wasm;

pub fn wat2wasm_command(infile: &str, output: Option<&str>, debug_names: bool) -> Result<()> {
    debug!("Converting: {}", infile);

    let source = fs::read(infile).with_context(|| format!("failed to read {infile}"))?;
    let wasm = Wat2Wasm::shared()
        .convert(&source, debug_names)
        .context("wat2wasm conversion failed")?;

    let outfile = match output {
        Some(path) => path.to_string(),
        None => format!("{infile}.wasm"),
    };
    fs::write(&outfile, wasm).with_context(|| format!("failed to write {outfile}"))?;

    debug!("Wrote {}", outfile);
    Ok(())
}
