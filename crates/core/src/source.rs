//! Source materialization: normalizing the ways raw content may be
//! supplied into plain bytes.

use std::fmt;
use std::fs;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};

/// How raw source content is supplied to a resolution call.
///
/// Exactly one variant is active per call. `Buffer` carries an instance
/// that may itself be absent: `Buffer(None)` is rejected as an invalid
/// source, while `Buffer(Some(vec![]))` is a valid empty one.
pub enum SourceInput {
    /// No inline content; read the path from disk
    Absent,
    Text(String),
    Bytes(Vec<u8>),
    Buffer(Option<Vec<u8>>),
    /// A streaming byte source, drained fully on materialization
    Reader(Box<dyn Read>),
}

impl SourceInput {
    /// True when the call carries inline content instead of a disk path
    pub fn is_inline(&self) -> bool {
        !matches!(self, SourceInput::Absent)
    }
}

impl fmt::Debug for SourceInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceInput::Absent => write!(f, "Absent"),
            SourceInput::Text(s) => write!(f, "Text({} bytes)", s.len()),
            SourceInput::Bytes(b) => write!(f, "Bytes({} bytes)", b.len()),
            SourceInput::Buffer(Some(b)) => write!(f, "Buffer({} bytes)", b.len()),
            SourceInput::Buffer(None) => write!(f, "Buffer(nil)"),
            SourceInput::Reader(_) => write!(f, "Reader"),
        }
    }
}

/// Normalize a source input into raw bytes.
///
/// Disk and reader failures propagate verbatim; an absent buffer
/// instance is the one hard `InvalidSource` case. No other side effects.
pub fn materialize(path: &Path, input: SourceInput) -> Result<Vec<u8>> {
    match input {
        SourceInput::Absent => Ok(fs::read(path)?),
        SourceInput::Text(s) => Ok(s.into_bytes()),
        SourceInput::Bytes(b) => Ok(b),
        SourceInput::Buffer(Some(b)) => Ok(b),
        SourceInput::Buffer(None) => Err(Error::InvalidSource),
        SourceInput::Reader(mut r) => {
            let mut buf = Vec::new();
            r.read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}
