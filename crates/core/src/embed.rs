//! Embed directive discovery.
//!
//! A lightweight syntactic pass over raw source that enumerates comments
//! and extracts `wa:embed` declarations before any full parse exists. The
//! scan is best-effort by design: anything it cannot make sense of simply
//! yields no declarations, never an error.

/// Extract embed-declared resource paths from raw source, in source order
pub fn scan_embeds(src: &[u8]) -> Vec<String> {
    let Ok(text) = std::str::from_utf8(src) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    for comment in comments(text) {
        for line in comment.lines() {
            if let Some(path) = parse_embed_directive(line) {
                out.push(path.to_string());
            }
        }
    }
    out
}

/// Enumerate comment bodies, skipping string, raw-string and char
/// literals so directive-shaped text inside them is never picked up.
fn comments(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut out = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                let start = i + 2;
                let end = line_end(bytes, start);
                out.push(&text[start..end]);
                i = end;
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                let start = i + 2;
                match text[start..].find("*/") {
                    Some(close) => {
                        out.push(&text[start..start + close]);
                        i = start + close + 2;
                    }
                    None => {
                        // unterminated block comment runs to end of file
                        out.push(&text[start..]);
                        break;
                    }
                }
            }
            b'#' => {
                let start = i + 1;
                let end = line_end(bytes, start);
                out.push(&text[start..end]);
                i = end;
            }
            b'"' => i = skip_quoted(bytes, i + 1, b'"'),
            b'\'' => i = skip_quoted(bytes, i + 1, b'\''),
            b'`' => {
                // raw string, no escapes
                i += 1;
                while i < bytes.len() && bytes[i] != b'`' {
                    i += 1;
                }
                i += 1;
            }
            _ => i += 1,
        }
    }
    out
}

fn line_end(bytes: &[u8], from: usize) -> usize {
    let mut i = from;
    while i < bytes.len() && bytes[i] != b'\n' {
        i += 1;
    }
    i
}

/// Skip a quoted literal with backslash escapes; returns the index past
/// the closing quote (or end of input when unterminated)
fn skip_quoted(bytes: &[u8], from: usize, quote: u8) -> usize {
    let mut i = from;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    i
}

/// Parse a single comment line as an embed directive, yielding the
/// declared path
fn parse_embed_directive(line: &str) -> Option<&str> {
    let rest = line.trim_start().strip_prefix("wa:embed")?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let path = rest.trim();
    let path = path
        .strip_prefix('"')
        .and_then(|p| p.strip_suffix('"'))
        .unwrap_or(path);
    if path.is_empty() { None } else { Some(path) }
}
