//! Serializer — renders a [`Value`] to text under a [`DumpConfig`].
//!
//! Two canned configurations cover almost every use: [`DumpConfig::compact`]
//! (single line, no separators — the persistence and equality-check form)
//! and [`DumpConfig::pretty`] (tab indentation, newline separators, long
//! strings truncated — the logging form).
//!
//! # Byte-wise high-byte escaping
//!
//! With `escape_high_bytes` set, every raw byte >= 0x7F is rendered as
//! `\u00XX` using that single byte's value. Multi-byte UTF-8 sequences
//! therefore come out as one escape **per byte** (the three bytes of `测`
//! become `\u00E6\u00B5\u008B`), and the parser folds each `\u00XX` back to one
//! byte, so the pair round-trips. This is intentionally not a code-point
//! escape; it matches the wire format of existing documents and must not
//! be "corrected" to proper Unicode escaping.

use std::fmt::{self, Write};

use crate::Value;

/// Strings longer than this many bytes are cut short when
/// `truncate_long_strings` is set.
const STRING_DISPLAY_LIMIT: usize = 1024;

/// Serializer configuration.
#[derive(Debug, Clone)]
pub struct DumpConfig {
    /// Indentation unit repeated once per nesting level.
    pub indent_unit: String,
    /// Terminator appended after brackets and after each child.
    pub eol: String,
    /// Render every string byte >= 0x7F as `\u00XX` (byte-wise).
    pub escape_high_bytes: bool,
    /// Render strings beyond 1024 bytes as `"<prefix>..."(N bytes)`.
    /// The result is not valid JSON; intended for logs, never persistence.
    pub truncate_long_strings: bool,
}

impl DumpConfig {
    /// Single-line form: no indentation, no separators, no truncation.
    pub fn compact() -> DumpConfig {
        DumpConfig {
            indent_unit: String::new(),
            eol: String::new(),
            escape_high_bytes: false,
            truncate_long_strings: false,
        }
    }

    /// Multi-line form: tab indentation, newline separators, long strings
    /// truncated.
    pub fn pretty() -> DumpConfig {
        DumpConfig {
            indent_unit: "\t".to_string(),
            eol: "\n".to_string(),
            escape_high_bytes: false,
            truncate_long_strings: true,
        }
    }
}

impl Default for DumpConfig {
    fn default() -> DumpConfig {
        DumpConfig::compact()
    }
}

impl Value {
    /// Compact single-line rendering.
    ///
    /// ```rust
    /// use jot_core::parse;
    ///
    /// let doc = parse("{a: 1, b: [true, null]}").unwrap();
    /// assert_eq!(doc.dump(), r#"{"a":1,"b":[true,null]}"#);
    /// ```
    pub fn dump(&self) -> String {
        self.dump_with(&DumpConfig::compact())
    }

    /// Compact rendering with every byte >= 0x7F escaped as `\u00XX`.
    pub fn dump_ascii(&self) -> String {
        self.dump_with(&DumpConfig {
            escape_high_bytes: true,
            ..DumpConfig::compact()
        })
    }

    /// Pretty multi-line rendering (tabs, newlines, long strings truncated).
    pub fn format(&self) -> String {
        self.dump_with(&DumpConfig::pretty())
    }

    /// Pretty rendering with every byte >= 0x7F escaped as `\u00XX`.
    pub fn format_ascii(&self) -> String {
        self.dump_with(&DumpConfig {
            escape_high_bytes: true,
            ..DumpConfig::pretty()
        })
    }

    /// Render under an explicit configuration.
    pub fn dump_with(&self, config: &DumpConfig) -> String {
        let mut out = String::new();
        write_value(self, 0, config, &mut out);
        out
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dump())
    }
}

fn write_value(value: &Value, depth: usize, config: &DumpConfig, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(text) => out.push_str(text),
        Value::String(text) => write_string(text, config, out),
        Value::Array(items) => {
            let prefix = config.indent_unit.repeat(depth);
            out.push('[');
            out.push_str(&config.eol);
            for (i, item) in items.iter().enumerate() {
                out.push_str(&prefix);
                out.push_str(&config.indent_unit);
                write_value(item, depth + 1, config, out);
                if i + 1 < items.len() {
                    out.push(',');
                }
                out.push_str(&config.eol);
            }
            out.push_str(&prefix);
            out.push(']');
        }
        Value::Object(map) => {
            let prefix = config.indent_unit.repeat(depth);
            out.push('{');
            out.push_str(&config.eol);
            for (i, (key, child)) in map.iter().enumerate() {
                out.push_str(&prefix);
                out.push_str(&config.indent_unit);
                out.push('"');
                escape_into(key, config.escape_high_bytes, out);
                out.push_str("\":");
                write_value(child, depth + 1, config, out);
                if i + 1 < map.len() {
                    out.push(',');
                }
                out.push_str(&config.eol);
            }
            out.push_str(&prefix);
            out.push('}');
        }
    }
}

fn write_string(text: &str, config: &DumpConfig, out: &mut String) {
    if config.truncate_long_strings && text.len() > STRING_DISPLAY_LIMIT {
        // Back off to a character boundary; the byte count reports the full
        // length regardless.
        let mut end = STRING_DISPLAY_LIMIT;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        out.push('"');
        out.push_str(&text[..end]);
        let _ = write!(out, "...\"({} bytes)", text.len());
        return;
    }
    out.push('"');
    escape_into(text, config.escape_high_bytes, out);
    out.push('"');
}

fn escape_into(text: &str, escape_high_bytes: bool, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '/' => out.push_str("\\/"),
            '\u{8}' => out.push_str("\\b"),
            '\u{C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ch if escape_high_bytes && ch as u32 >= 0x7F => {
                let mut utf8 = [0u8; 4];
                for byte in ch.encode_utf8(&mut utf8).bytes() {
                    let _ = write!(out, "\\u00{byte:02X}");
                }
            }
            ch => out.push(ch),
        }
    }
}
