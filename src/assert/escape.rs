//! String normalization used when rendering assertion operands.

use std::fmt::Write as _;

/// Render `text` for a failure report.
///
/// Newlines become `\n`, tabs `\t`, quotes `\"` and every other byte outside
/// printable ASCII becomes `\xHH`. In block mode (`compact == false`) each
/// escaped newline that is not the last character is followed by a real line
/// break, and non-empty text gets a trailing line break. Compact mode keeps
/// everything on one line and wraps the result in quotes.
pub fn escape(text: &str, compact: bool) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(bytes.len() + 2);
    if compact {
        out.push('"');
    }
    for (idx, &byte) in bytes.iter().enumerate() {
        match byte {
            b'\n' => {
                out.push_str("\\n");
                if !compact && idx + 1 != bytes.len() {
                    out.push('\n');
                }
            }
            b'\t' => out.push_str("\\t"),
            b'"' => out.push_str("\\\""),
            0x20..=0x7e => out.push(byte as char),
            _ => {
                let _ = write!(out, "\\x{:02x}", byte);
            }
        }
    }
    if compact {
        out.push('"');
    } else if !text.is_empty() {
        out.push('\n');
    }
    out
}

/// Remove line numbers of the form `:NUMBER:` so that diagnostics can be
/// compared without caring where in a file they were raised.
///
/// `"foo:123:bar:45:baz"` becomes `"foo::bar::baz"`. A digit run that is not
/// closed by a colon is kept. After an erase, scanning resumes at the closing
/// colon, so chained runs such as `":1:2:"` collapse completely.
pub fn delete_line_numbers(message: &str) -> String {
    let mut result = message.as_bytes().to_vec();
    let mut pos = 0;
    while let Some(found) = result[pos..].iter().position(|&b| b == b':') {
        let colon = pos + found;
        let digits_start = colon + 1;
        let digits_len = result[digits_start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        let after = digits_start + digits_len;
        if digits_len > 0 && result.get(after) == Some(&b':') {
            result.drain(digits_start..after);
        }
        pos = digits_start;
    }
    // Only ASCII digits were removed, so the bytes are still valid UTF-8.
    String::from_utf8(result)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}
