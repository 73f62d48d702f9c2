//! File helpers -- load a document from disk, save one back.
//!
//! Thin wrappers only: read the whole file to text and hand it to the
//! parser, or serialize and write the whole text back. Failures carry the
//! offending path; callers decide whether they are fatal.

use std::fs;
use std::path::Path;

use crate::dump::DumpConfig;
use crate::error::{Error, Result};
use crate::{parser, Value};

/// Read `path` and parse it with the lenient grammar.
pub fn load(path: impl AsRef<Path>) -> Result<Value> {
    load_inner(path.as_ref(), false)
}

/// Read `path` and parse it with the strict grammar.
pub fn load_strict(path: impl AsRef<Path>) -> Result<Value> {
    load_inner(path.as_ref(), true)
}

fn load_inner(path: &Path, strict: bool) -> Result<Value> {
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if strict {
        parser::parse_strict(&text)
    } else {
        parser::parse(&text)
    }
}

/// Write `value` to `path` in the multi-line form (tab indentation,
/// trailing newline). Truncation is off: saved output is always valid,
/// complete JSON.
pub fn save(path: impl AsRef<Path>, value: &Value) -> Result<()> {
    save_inner(path.as_ref(), value, false)
}

/// Like [`save`], creating missing parent directories first.
pub fn save_create_dirs(path: impl AsRef<Path>, value: &Value) -> Result<()> {
    save_inner(path.as_ref(), value, true)
}

fn save_inner(path: &Path, value: &Value, create_dirs: bool) -> Result<()> {
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };
    if create_dirs {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
    }
    let mut text = value.dump_with(&DumpConfig {
        truncate_long_strings: false,
        ..DumpConfig::pretty()
    });
    text.push('\n');
    fs::write(path, text).map_err(io_err)
}
