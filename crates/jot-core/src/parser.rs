//! Recursive-descent JSON reader with a strict and a lenient grammar
//! sharing one core.
//!
//! [`parse_strict`] accepts classic JSON: quoted strings only, the
//! `null`/`true`/`false` literals, numbers with optional sign/fraction/
//! exponent, and `/* ... */` comments between tokens. [`parse`] (the
//! default) accepts a superset intended for hand-written config text:
//!
//! - Bare tokens stand in for strings and keys; a bare token runs until
//!   one of `: , } ]`, whitespace, or end of input, honoring the same
//!   backslash escapes as quoted strings.
//! - Trailing commas and empty elements (`[1,,2,]`) are tolerated.
//! - A token is taken as a number or keyword **only** when followed by a
//!   valid separator (comma, closing bracket, whitespace, end of input).
//!   Otherwise the whole token degrades to a bare string: `192.168.0.101`
//!   starts like the number `192`, is rejected at the `.`, and comes back
//!   as one string; `true2` likewise.
//!
//! # Key design decisions
//!
//! - **Byte cursor, offset errors.** The cursor walks raw bytes so string
//!   escapes can operate byte-wise (see [`crate::dump`]); every failure
//!   reports the byte offset of the first offending character.
//! - **Probe-and-backtrack numbers.** Lenient number recognition parses a
//!   candidate, checks the follower, and rewinds to re-scan the token as a
//!   bare string when the follower disqualifies it. This mirrors the
//!   separator gate on keywords and keeps the two fallbacks consistent.
//! - **Whole-input consumption.** A successful parse leaves only
//!   whitespace and comments behind; any other leftover byte fails the
//!   parse even in lenient mode.

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::Value;

/// Parse with the lenient grammar (the default).
///
/// Lenient parsing succeeds on most inputs — anything unrecognized
/// degrades to a bare string — but unbalanced brackets, bad escape
/// sequences, and leftover content still fail.
///
/// ```rust
/// use jot_core::parse;
///
/// let doc = parse("{host: 192.168.0.101, port: 8080, /* retries */ tries: 3,}").unwrap();
/// assert_eq!(doc["host"].as_string(), "192.168.0.101");
/// assert_eq!(doc["port"].as_i64(), 8080);
/// ```
pub fn parse(text: &str) -> Result<Value> {
    parse_mode(text, false)
}

/// Parse with the strict JSON grammar.
///
/// On failure the returned [`Error`](crate::Error) carries the byte offset
/// of the first character that could not be parsed.
pub fn parse_strict(text: &str) -> Result<Value> {
    parse_mode(text, true)
}

fn parse_mode(text: &str, strict: bool) -> Result<Value> {
    let mut cursor = Cursor {
        text,
        bytes: text.as_bytes(),
        pos: 0,
        strict,
    };
    let value = cursor.parse_value()?;
    cursor.skip_ws();
    if cursor.pos != cursor.bytes.len() {
        return Err(cursor.fail("trailing characters after value"));
    }
    Ok(value)
}

impl std::str::FromStr for Value {
    type Err = Error;

    /// Lenient parse; the `str::parse` spelling of [`parse`].
    fn from_str(s: &str) -> Result<Value> {
        parse(s)
    }
}

/// A byte that may legally follow a number or keyword token.
fn is_separator(c: u8) -> bool {
    matches!(c, 0 | b',' | b']' | b'}' | b' ' | b'\t' | b'\n' | b'\r')
}

/// A byte that terminates a bare (unquoted) token.
fn is_bare_delimiter(c: u8) -> bool {
    c == 0 || matches!(c, b':' | b',' | b'}' | b']') || c.is_ascii_whitespace()
}

fn hex_value(c: u8) -> Option<u16> {
    match c {
        b'0'..=b'9' => Some(u16::from(c - b'0')),
        b'A'..=b'F' => Some(u16::from(c - b'A') + 10),
        b'a'..=b'f' => Some(u16::from(c - b'a') + 10),
        _ => None,
    }
}

/// Escaped string bytes accumulate as raw bytes; convert back to text,
/// degrading lossily if `\uXXXX` escapes assembled an invalid sequence.
fn bytes_to_string(buf: Vec<u8>) -> String {
    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}

struct Cursor<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
    strict: bool,
}

impl Cursor<'_> {
    /// Current byte, with 0 standing in for end of input.
    fn peek(&self) -> u8 {
        self.bytes.get(self.pos).copied().unwrap_or(0)
    }

    fn peek_at(&self, offset: usize) -> u8 {
        self.bytes.get(self.pos + offset).copied().unwrap_or(0)
    }

    fn fail(&self, message: &str) -> Error {
        Error::Syntax {
            offset: self.pos,
            message: message.to_string(),
        }
    }

    /// Skip whitespace and `/* ... */` comments. An unterminated comment
    /// swallows the rest of the input.
    fn skip_ws(&mut self) {
        loop {
            let c = self.peek();
            if c != 0 && c.is_ascii_whitespace() {
                self.pos += 1;
            } else if c == b'/' && self.peek_at(1) == b'*' {
                self.pos += 2;
                while self.pos < self.bytes.len() {
                    if self.peek() == b'*' && self.peek_at(1) == b'/' {
                        self.pos += 2;
                        break;
                    }
                    self.pos += 1;
                }
            } else {
                break;
            }
        }
    }

    fn parse_value(&mut self) -> Result<Value> {
        self.skip_ws();
        let c = self.peek();
        if c == b'"' {
            return self.parse_quoted_string();
        }
        if c == b'+' || c == b'-' || c == b'.' || c.is_ascii_digit() {
            let start = self.pos;
            if let Some(number) = self.try_parse_number() {
                if self.strict || is_separator(self.peek()) {
                    return Ok(number);
                }
                // The number-looking prefix has a bad follower; re-scan the
                // whole token as a bare string.
                self.pos = start;
            } else if self.strict {
                return Err(self.fail("malformed number"));
            }
        }
        if c == b'{' {
            return self.parse_object();
        }
        if c == b'[' {
            return self.parse_array();
        }
        if self.match_keyword(b"null") {
            return Ok(Value::Null);
        }
        if self.match_keyword(b"true") {
            return Ok(Value::Bool(true));
        }
        if self.match_keyword(b"false") {
            return Ok(Value::Bool(false));
        }
        if !self.strict {
            return self.parse_bare_string();
        }
        Err(self.fail("expected a JSON value"))
    }

    /// Consume `word` only when it is followed by a valid separator, so
    /// that `true2` stays available as a bare string.
    fn match_keyword(&mut self, word: &[u8]) -> bool {
        if self.bytes[self.pos..].starts_with(word) && is_separator(self.peek_at(word.len())) {
            self.pos += word.len();
            return true;
        }
        false
    }

    /// Match the number grammar at the cursor, capturing the numeral text
    /// verbatim. Restores the cursor and returns `None` when the grammar
    /// does not match.
    fn try_parse_number(&mut self) -> Option<Value> {
        let start = self.pos;
        if matches!(self.peek(), b'+' | b'-') {
            self.pos += 1;
        }
        if !self.peek().is_ascii_digit() && self.peek() != b'.' {
            self.pos = start;
            return None;
        }
        self.pos += 1;
        while self.peek().is_ascii_digit() {
            self.pos += 1;
        }
        if self.peek() == b'.' {
            self.pos += 1;
            while self.peek().is_ascii_digit() {
                self.pos += 1;
            }
        }
        if matches!(self.peek(), b'e' | b'E') {
            self.pos += 1;
            if matches!(self.peek(), b'+' | b'-') {
                self.pos += 1;
            }
            if !self.peek().is_ascii_digit() {
                self.pos = start;
                return None;
            }
            while self.peek().is_ascii_digit() {
                self.pos += 1;
            }
        }
        Some(Value::Number(self.text[start..self.pos].to_string()))
    }

    fn parse_quoted_string(&mut self) -> Result<Value> {
        self.skip_ws();
        if self.peek() != b'"' {
            return Err(self.fail("expected '\"'"));
        }
        self.pos += 1;
        let mut buf = Vec::new();
        loop {
            match self.peek() {
                0 | b'"' => break,
                b'\\' => self.read_escape(&mut buf)?,
                c => {
                    buf.push(c);
                    self.pos += 1;
                }
            }
        }
        if self.peek() != b'"' {
            return Err(self.fail("unterminated string"));
        }
        self.pos += 1;
        Ok(Value::String(bytes_to_string(buf)))
    }

    /// Scan an unquoted token up to the delimiter set, honoring the same
    /// escapes as quoted strings. An empty run is a valid empty string.
    fn parse_bare_string(&mut self) -> Result<Value> {
        self.skip_ws();
        let mut buf = Vec::new();
        loop {
            let c = self.peek();
            if is_bare_delimiter(c) {
                break;
            }
            if c == b'\\' {
                self.read_escape(&mut buf)?;
            } else {
                buf.push(c);
                self.pos += 1;
            }
        }
        Ok(Value::String(bytes_to_string(buf)))
    }

    /// Decode one backslash escape into `buf`. `\uXXXX` contributes the low
    /// byte of the code unit — the byte-wise model described in
    /// [`crate::dump`].
    fn read_escape(&mut self, buf: &mut Vec<u8>) -> Result<()> {
        self.pos += 1;
        match self.peek() {
            c @ (b'"' | b'\\' | b'/') => {
                buf.push(c);
                self.pos += 1;
            }
            b'b' => {
                buf.push(0x08);
                self.pos += 1;
            }
            b'f' => {
                buf.push(0x0C);
                self.pos += 1;
            }
            b'n' => {
                buf.push(b'\n');
                self.pos += 1;
            }
            b'r' => {
                buf.push(b'\r');
                self.pos += 1;
            }
            b't' => {
                buf.push(b'\t');
                self.pos += 1;
            }
            b'u' => {
                let mut code: u16 = 0;
                for i in 1..=4 {
                    match hex_value(self.peek_at(i)) {
                        Some(digit) => code = (code << 4) | digit,
                        None => return Err(self.fail("expected four hex digits after \\u")),
                    }
                }
                buf.push((code & 0xFF) as u8);
                self.pos += 5;
            }
            _ => return Err(self.fail("invalid escape sequence")),
        }
        Ok(())
    }

    fn parse_object(&mut self) -> Result<Value> {
        self.skip_ws();
        if self.peek() != b'{' {
            return Err(self.fail("expected '{'"));
        }
        self.pos += 1;
        self.skip_ws();
        let mut map = IndexMap::new();
        if self.peek() != b'}' {
            loop {
                if !self.strict {
                    self.skip_ws();
                    if self.peek() == b',' {
                        self.pos += 1;
                        continue;
                    }
                    if self.peek() == b'}' {
                        break;
                    }
                }
                let key = if self.peek() != b'"' && !self.strict {
                    self.parse_bare_string()?
                } else {
                    self.parse_quoted_string()?
                };
                let key = key.as_string();
                self.skip_ws();
                if self.peek() != b':' {
                    return Err(self.fail("expected ':' after object key"));
                }
                self.pos += 1;
                let value = self.parse_value()?;
                self.skip_ws();
                // Duplicate keys: the last value wins, the first position wins.
                map.insert(key, value);
                if self.peek() == b'}' {
                    break;
                }
                if self.peek() == b',' {
                    self.pos += 1;
                } else if self.strict {
                    return Err(self.fail("expected ',' or '}' in object"));
                }
            }
        }
        self.pos += 1;
        Ok(Value::Object(map))
    }

    fn parse_array(&mut self) -> Result<Value> {
        self.skip_ws();
        if self.peek() != b'[' {
            return Err(self.fail("expected '['"));
        }
        self.pos += 1;
        self.skip_ws();
        let mut items = Vec::new();
        if self.peek() != b']' {
            loop {
                if !self.strict {
                    self.skip_ws();
                    if self.peek() == b',' {
                        self.pos += 1;
                        continue;
                    }
                    if self.peek() == b']' {
                        break;
                    }
                }
                let value = self.parse_value()?;
                self.skip_ws();
                items.push(value);
                if self.peek() == b']' {
                    break;
                }
                if self.peek() == b'}' {
                    return Err(self.fail("mismatched '}' in array"));
                }
                if self.peek() == 0 {
                    return Err(self.fail("unterminated array"));
                }
                if self.peek() == b',' {
                    self.pos += 1;
                } else if self.strict {
                    return Err(self.fail("expected ',' or ']' in array"));
                }
            }
        }
        self.pos += 1;
        Ok(Value::Array(items))
    }
}
