//! # jot-core
//!
//! An order-preserving JSON document tree with a dual-mode parser.
//!
//! jot models a JSON document as a mutable [`Value`] tree that keeps object
//! keys in insertion order and numbers as their exact source text. Text
//! comes in through a strict RFC-style grammar ([`parse_strict`]) or a
//! relaxed superset ([`parse`], the default) that tolerates unquoted keys
//! and strings, `/* ... */` comments, and trailing commas -- the shape of
//! hand-written config files. Text goes out through a configurable
//! serializer ([`DumpConfig`]), and sub-values come back out through a
//! small `/`-delimited path-query language.
//!
//! ## Quick start
//!
//! ```rust
//! use jot_core::parse;
//!
//! let mut doc = parse("{name: Ada, tags: [math, computing],}").unwrap();
//! assert_eq!(doc["name"].as_string(), "Ada");
//!
//! doc["tags"].push("logic");
//! assert_eq!(doc.dump(), r#"{"name":"Ada","tags":["math","computing","logic"]}"#);
//!
//! assert_eq!(doc.query("tags/1").as_string(), "computing");
//! ```
//!
//! ## Modules
//!
//! - [`value`] -- the [`Value`] tree: accessors, mutation, iteration
//! - [`parser`] -- strict and lenient text -> [`Value`]
//! - [`dump`] -- [`Value`] -> text under a [`DumpConfig`]
//! - [`io`] -- whole-file load/save helpers
//! - [`error`] -- error types for parse and I/O failures

pub mod dump;
pub mod error;
pub mod io;
pub mod parser;
mod query;
pub mod value;

pub use dump::DumpConfig;
pub use error::{Error, Result};
pub use io::{load, load_strict, save, save_create_dirs};
pub use parser::{parse, parse_strict};
pub use value::{Kind, Value};
