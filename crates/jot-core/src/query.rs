//! Path queries -- extract sub-values with a `/`-delimited path string.
//!
//! A path is a sequence of segments. Against an array, a segment is an
//! unsigned index (non-numeric segments read as 0); against anything else
//! it is an object key. The only special segment is `*`, which fans out
//! over every child in order and flattens one level of array results.
//!
//! Queries walk the non-mutating accessor path exclusively, so querying
//! never coerces or otherwise changes the queried tree.

use crate::value::int_prefix;
use crate::Value;

impl Value {
    /// Evaluate a `/`-delimited path against this value, returning an
    /// owned result. Misses yield `Null`; `*` yields an array (possibly
    /// empty).
    ///
    /// ```rust
    /// use jot_core::parse;
    ///
    /// let doc = parse("[{name:Alice,age:20},{name:Bob,age:25}]").unwrap();
    /// assert_eq!(doc.query("*/name").dump(), r#"["Alice","Bob"]"#);
    /// assert_eq!(doc.query("0/age").dump(), "20");
    /// assert_eq!(doc.query("9/age").dump(), "null");
    /// ```
    pub fn query(&self, path: &str) -> Value {
        if path.is_empty() {
            return self.clone();
        }
        let (segment, rest) = match path.split_once('/') {
            Some((segment, rest)) => (segment, rest),
            None => (path, ""),
        };
        if segment == "*" {
            let mut out = Vec::new();
            for (_, child) in self.iter() {
                match child.query(rest) {
                    // Flatten one level so nested wildcards splice rather
                    // than nest.
                    Value::Array(items) => out.extend(items),
                    single => out.push(single),
                }
            }
            Value::Array(out)
        } else if self.is_array() {
            let index: usize = int_prefix(segment, false).parse().unwrap_or(0);
            self.get(index).unwrap_or(&Value::Null).query(rest)
        } else {
            self.get_key(segment).unwrap_or(&Value::Null).query(rest)
        }
    }
}
