//! External wat-to-wasm converter collaborator.
//!
//! The converter is a separate executable discovered once and shared for
//! the process lifetime. Discovery probes, in order: beside the current
//! executable, the working directory, the system `PATH`, then a fixed
//! conventional location. Invocations stream the input over the child's
//! stdin and are serialized behind the instance's lock.

use std::env;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::{Mutex, OnceLock, PoisonError};

use tracing::{debug, trace};

use crate::error::{Error, Result};

/// Fixed executable name of the external converter
pub const WAT2WASM_NAME: &str = "wa.wat2wasm.exe";

static SHARED: OnceLock<Wat2Wasm> = OnceLock::new();

/// Lazily discovered converter handle; the discovery result is fixed for
/// the lifetime of the instance
#[derive(Debug)]
pub struct Wat2Wasm {
    exe: Option<PathBuf>,
    gate: Mutex<()>,
}

impl Wat2Wasm {
    /// Probe the fixed discovery order and keep the first hit
    pub fn discover() -> Wat2Wasm {
        let exe = discover_exe();
        match &exe {
            Some(path) => debug!(?path, "wat2wasm discovered"),
            None => debug!("wat2wasm not found"),
        }
        Wat2Wasm {
            exe,
            gate: Mutex::new(()),
        }
    }

    /// Process-wide shared instance, discovered on first use
    pub fn shared() -> &'static Wat2Wasm {
        SHARED.get_or_init(Wat2Wasm::discover)
    }

    /// Convert textual wat input into wasm binary bytes.
    ///
    /// On converter failure the diagnostic text from stderr becomes the
    /// error when present, otherwise the raw execution error surfaces.
    pub fn convert(&self, wat: &[u8], debug_names: bool) -> Result<Vec<u8>> {
        let _gate = self.gate.lock().unwrap_or_else(PoisonError::into_inner);

        let Some(exe) = &self.exe else {
            return Err(Error::ConverterUnavailable);
        };

        let mut args = vec!["-", "--output=-"];
        if debug_names {
            args.push("--debug-names");
        }
        trace!(?exe, ?args, "running wat2wasm");

        let mut child = Command::new(exe)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        // The input is pumped from a helper thread: the converter may
        // exit with a diagnostic before draining its stdin, and that
        // diagnostic must win over the resulting broken pipe.
        let stdin = child.stdin.take();
        let output = std::thread::scope(|scope| {
            scope.spawn(move || {
                if let Some(mut stdin) = stdin {
                    let _ = stdin.write_all(wat);
                }
            });
            child.wait_with_output()
        })?;
        if !output.status.success() {
            if !output.stderr.is_empty() {
                return Err(Error::ConverterFailed(
                    String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
                ));
            }
            return Err(Error::ConverterFailed(format!(
                "wat2wasm exited with {}",
                output.status
            )));
        }
        Ok(output.stdout)
    }
}

fn discover_exe() -> Option<PathBuf> {
    // 1. beside the running executable
    if let Some(dir) = env::current_exe().ok().and_then(|p| p.parent().map(Path::to_path_buf)) {
        let candidate = dir.join(WAT2WASM_NAME);
        if is_regular_file(&candidate) {
            return Some(candidate);
        }
    }

    // 2. current working directory
    if let Ok(cwd) = env::current_dir() {
        let candidate = cwd.join(WAT2WASM_NAME);
        if is_regular_file(&candidate) {
            return Some(candidate);
        }
    }

    // 3. system PATH
    if let Some(paths) = env::var_os("PATH") {
        for dir in env::split_paths(&paths) {
            let candidate = dir.join(WAT2WASM_NAME);
            if is_regular_file(&candidate) {
                return Some(candidate);
            }
        }
    }

    // 4. conventional fixed location
    let fixed = if cfg!(windows) {
        PathBuf::from(format!("c:/{WAT2WASM_NAME}"))
    } else {
        PathBuf::from(format!("/usr/local/bin/{WAT2WASM_NAME}"))
    };
    if is_regular_file(&fixed) {
        return Some(fixed);
    }

    None
}

fn is_regular_file(path: &Path) -> bool {
    path.symlink_metadata().map(|m| m.is_file()).unwrap_or(false)
}
