//! The JSON document tree — a single recursive [`Value`] type plus its
//! accessor and mutation surface.
//!
//! A `Value` holds any JSON-equivalent entity. Two payload decisions shape
//! everything else in the crate:
//!
//! - **Numbers are text.** `Number` stores the exact numeral substring that
//!   was parsed or assigned (sign, digits, fraction, exponent verbatim).
//!   Equality and serialization operate on that text; `1` and `1.0` are
//!   distinct values. Numeric conversion happens only on demand through
//!   [`Value::as_i64`] and friends.
//! - **Objects are ordered.** The `Object` variant is an
//!   `IndexMap<String, Value>`: iteration order is insertion order, lookup
//!   is hashed, and map equality ignores order — which is exactly the
//!   object-equality contract (same key set, pairwise-equal values).
//!
//! # Lookup vs. auto-vivification
//!
//! Sub-access comes in two deliberately distinct flavors:
//!
//! - [`Value::get`] / [`Value::get_key`] never mutate; a miss or a kind
//!   mismatch yields `None`. The `Index` operators (`&value[2]`,
//!   `&value["name"]`) are the sentinel form of the same thing: misses
//!   yield a shared `Null`.
//! - [`Value::at`] / [`Value::at_key`] are get-or-create: a receiver of the
//!   wrong kind is cleared and coerced (discarding its contents), arrays
//!   pad with `Null` through the requested index, objects insert the key
//!   with a `Null` value. The `IndexMut` operators route here, so nested
//!   structures can be built by assignment alone:
//!
//! ```rust
//! use jot_core::Value;
//!
//! let mut doc = Value::default();
//! doc["servers"][0] = "alpha".into();
//! doc["servers"][1] = "beta".into();
//! assert_eq!(doc.dump(), r#"{"servers":["alpha","beta"]}"#);
//! ```

use indexmap::IndexMap;

/// Shared immutable sentinel returned by const lookups that miss.
static NULL: Value = Value::Null;

/// The tag identifying which of the six value categories a node holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

/// One JSON-equivalent entity: null, boolean, number, string, array, or
/// object. See the [module docs](self) for the payload model.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    /// The exact numeral text, kept verbatim.
    Number(String),
    /// Raw, unescaped string content.
    String(String),
    Array(Vec<Value>),
    /// Key/value entries in insertion order.
    Object(IndexMap<String, Value>),
}

impl Value {
    /// The kind tag of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    /// The empty value of a given kind (`Null`, `false`, empty text, empty
    /// container).
    pub fn empty(kind: Kind) -> Value {
        match kind {
            Kind::Null => Value::Null,
            Kind::Bool => Value::Bool(false),
            Kind::Number => Value::Number(String::new()),
            Kind::String => Value::String(String::new()),
            Kind::Array => Value::Array(Vec::new()),
            Kind::Object => Value::Object(IndexMap::new()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Truthiness: containers are true iff non-empty, `Null` is false, and
    /// scalars are false only for empty text, `"false"`, or `"0"`.
    pub fn as_bool(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(text) | Value::String(text) => {
                !text.is_empty() && text != "false" && text != "0"
            }
            Value::Array(items) => !items.is_empty(),
            Value::Object(map) => !map.is_empty(),
        }
    }

    /// String rendering: `Null` is empty, containers serialize to their
    /// compact form, scalars yield their payload text verbatim.
    pub fn as_string(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(true) => "true".to_string(),
            Value::Bool(false) => "false".to_string(),
            Value::Number(text) | Value::String(text) => text.clone(),
            Value::Array(_) | Value::Object(_) => self.dump(),
        }
    }

    /// Numeric conversion, never failing: `Null` is 0, `Bool` is 0/1, and
    /// text kinds parse their longest leading integer prefix (`"123abc"` is
    /// 123, `"+23"` is 23). Malformed text yields 0.
    pub fn as_i64(&self) -> i64 {
        match self {
            Value::Null | Value::Array(_) | Value::Object(_) => 0,
            Value::Bool(b) => i64::from(*b),
            Value::Number(text) | Value::String(text) => {
                int_prefix(text, true).parse().unwrap_or(0)
            }
        }
    }

    /// Unsigned counterpart of [`Value::as_i64`]; negative text yields 0.
    pub fn as_u64(&self) -> u64 {
        match self {
            Value::Null | Value::Array(_) | Value::Object(_) => 0,
            Value::Bool(b) => u64::from(*b),
            Value::Number(text) | Value::String(text) => {
                int_prefix(text, false).parse().unwrap_or(0)
            }
        }
    }

    /// Floating-point counterpart of [`Value::as_i64`], parsing the longest
    /// leading float prefix (`"12.5s"` is 12.5).
    pub fn as_f64(&self) -> f64 {
        match self {
            Value::Null | Value::Array(_) | Value::Object(_) => 0.0,
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Number(text) | Value::String(text) => {
                float_prefix(text).parse().unwrap_or(0.0)
            }
        }
    }

    /// Child count for containers, 0 for `Null`, 1 for scalars.
    pub fn len(&self) -> usize {
        match self {
            Value::Array(items) => items.len(),
            Value::Object(map) => map.len(),
            Value::Null => 0,
            _ => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Object keys in insertion order; empty for every other kind.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        let keys = match self {
            Value::Object(map) => Some(map.keys().map(String::as_str)),
            _ => None,
        };
        keys.into_iter().flatten()
    }

    /// True iff this is an object containing `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        matches!(self, Value::Object(map) if map.contains_key(key))
    }

    /// True iff `key` is present and its [`Value::as_string`] is non-empty.
    pub fn has_non_empty(&self, key: &str) -> bool {
        self.get_key(key).is_some_and(|v| !v.as_string().is_empty())
    }

    /// Array element lookup. Never mutates; `None` on a non-array receiver
    /// or an out-of-range index.
    pub fn get(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(items) => items.get(index),
            _ => None,
        }
    }

    /// Object entry lookup. Never mutates; `None` on a non-object receiver
    /// or a missing key.
    pub fn get_key(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Mutable element lookup without coercion.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        match self {
            Value::Array(items) => items.get_mut(index),
            _ => None,
        }
    }

    /// Mutable entry lookup without coercion.
    pub fn get_key_mut(&mut self, key: &str) -> Option<&mut Value> {
        match self {
            Value::Object(map) => map.get_mut(key),
            _ => None,
        }
    }

    /// Get-or-create array element. A non-array receiver is cleared and
    /// coerced to an array, discarding its contents; indices beyond the
    /// current length pad with `Null` up to and including `index`.
    pub fn at(&mut self, index: usize) -> &mut Value {
        let items = self.coerce_array();
        if index >= items.len() {
            items.resize_with(index + 1, Value::default);
        }
        &mut items[index]
    }

    /// Get-or-create object entry. A non-object receiver is cleared and
    /// coerced to an object, discarding its contents; a missing key is
    /// inserted (at the end of the key order) with a `Null` value.
    pub fn at_key(&mut self, key: &str) -> &mut Value {
        self.coerce_object()
            .entry(key.to_string())
            .or_insert_with(Value::default)
    }

    /// Append to an array, coercing the receiver first if needed.
    pub fn push(&mut self, value: impl Into<Value>) {
        self.coerce_array().push(value.into());
    }

    /// Insert into an array just before `before`, coercing the receiver
    /// first if needed. `before` at or past the end appends.
    pub fn insert(&mut self, before: usize, value: impl Into<Value>) {
        let items = self.coerce_array();
        let at = before.min(items.len());
        items.insert(at, value.into());
    }

    /// Insert or overwrite an object entry, coercing the receiver first if
    /// needed. A new key enters the key order just before `before` (clamped
    /// to append); an existing key keeps its position and takes the new
    /// value.
    pub fn insert_key(&mut self, key: impl Into<String>, value: impl Into<Value>, before: usize) {
        let map = self.coerce_object();
        let key = key.into();
        if map.contains_key(&key) {
            map.insert(key, value.into());
        } else {
            let at = before.min(map.len());
            map.shift_insert(at, key, value.into());
        }
    }

    /// Reposition array element `index` to land just before position
    /// `before` in the resulting sequence; `before` at or past the end
    /// moves to the end. Out-of-range `index`, a non-array receiver, or a
    /// target that leaves the element in place are no-ops.
    pub fn move_item(&mut self, index: usize, before: usize) {
        if let Value::Array(items) = self {
            if index >= items.len() {
                return;
            }
            if before >= items.len() {
                let item = items.remove(index);
                items.push(item);
            } else if index < before {
                let item = items.remove(index);
                items.insert(before - 1, item);
            } else if index > before {
                let item = items.remove(index);
                items.insert(before, item);
            }
        }
    }

    /// Reposition an object entry, located by key, within the key order.
    /// Missing keys and non-object receivers are no-ops.
    pub fn move_key(&mut self, key: &str, before: usize) {
        if let Value::Object(map) = self {
            let Some(from) = map.get_index_of(key) else {
                return;
            };
            let to = if before >= map.len() {
                map.len() - 1
            } else if from < before {
                before - 1
            } else {
                before
            };
            if to != from {
                map.move_index(from, to);
            }
        }
    }

    /// Remove an array element; out-of-range indices and non-array
    /// receivers are no-ops.
    pub fn erase(&mut self, index: usize) {
        if let Value::Array(items) = self {
            if index < items.len() {
                items.remove(index);
            }
        }
    }

    /// Remove an object entry from both the map and the key order; missing
    /// keys and non-object receivers are no-ops.
    pub fn erase_key(&mut self, key: &str) {
        if let Value::Object(map) = self {
            map.shift_remove(key);
        }
    }

    /// Reset to `Null`, discarding all contents.
    pub fn clear(&mut self) {
        *self = Value::Null;
    }

    /// Reset to the empty value of `kind`, discarding all contents.
    pub fn reset(&mut self, kind: Kind) {
        *self = Value::empty(kind);
    }

    /// Forward cursor over a container's children in order: objects yield
    /// `(Some(key), value)` following the key order, arrays yield
    /// `(None, element)` by position. Non-containers yield nothing.
    pub fn iter(&self) -> Iter<'_> {
        match self {
            Value::Array(items) => Iter(IterRepr::Array(items.iter())),
            Value::Object(map) => Iter(IterRepr::Object(map.iter())),
            _ => Iter(IterRepr::Empty),
        }
    }

    /// Mutable counterpart of [`Value::iter`]. Values can be replaced
    /// through the cursor; membership and order cannot.
    pub fn iter_mut(&mut self) -> IterMut<'_> {
        match self {
            Value::Array(items) => IterMut(IterMutRepr::Array(items.iter_mut())),
            Value::Object(map) => IterMut(IterMutRepr::Object(map.iter_mut())),
            _ => IterMut(IterMutRepr::Empty),
        }
    }

    fn coerce_array(&mut self) -> &mut Vec<Value> {
        if !matches!(self, Value::Array(_)) {
            *self = Value::Array(Vec::new());
        }
        match self {
            Value::Array(items) => items,
            _ => unreachable!(),
        }
    }

    fn coerce_object(&mut self) -> &mut IndexMap<String, Value> {
        if !matches!(self, Value::Object(_)) {
            *self = Value::Object(IndexMap::new());
        }
        match self {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }
}

/// Longest leading integer prefix in `stringstream` extraction style:
/// optional sign (minus only when `signed`), then digits. Empty when the
/// text has no leading integer.
pub(crate) fn int_prefix(text: &str, signed: bool) -> &str {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;
    if end < bytes.len() && (bytes[end] == b'+' || (signed && bytes[end] == b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return "";
    }
    &text[..end]
}

/// Longest leading float prefix: sign, digits, optional fraction, optional
/// well-formed exponent. An exponent missing its digits is left out of the
/// prefix rather than invalidating it.
pub(crate) fn float_prefix(text: &str) -> &str {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;
    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let mut digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return "";
    }
    let mantissa_end = end;
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp = end + 1;
        if exp < bytes.len() && (bytes[exp] == b'+' || bytes[exp] == b'-') {
            exp += 1;
        }
        let exp_digits_start = exp;
        while exp < bytes.len() && bytes[exp].is_ascii_digit() {
            exp += 1;
        }
        end = if exp > exp_digits_start { exp } else { mantissa_end };
    }
    &text[..end]
}

impl From<bool> for Value {
    fn from(v: bool) -> Value {
        Value::Bool(v)
    }
}

macro_rules! value_from_number {
    ($($ty:ty),* $(,)?) => {$(
        impl From<$ty> for Value {
            fn from(v: $ty) -> Value {
                Value::Number(v.to_string())
            }
        }
    )*};
}

value_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<&str> for Value {
    fn from(v: &str) -> Value {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Value {
        Value::String(v)
    }
}

impl std::ops::Index<usize> for Value {
    type Output = Value;

    /// Sentinel lookup: a non-array receiver or out-of-range index yields
    /// the shared `Null`.
    fn index(&self, index: usize) -> &Value {
        self.get(index).unwrap_or(&NULL)
    }
}

impl std::ops::Index<&str> for Value {
    type Output = Value;

    /// Sentinel lookup: a non-object receiver or missing key yields the
    /// shared `Null`.
    fn index(&self, key: &str) -> &Value {
        self.get_key(key).unwrap_or(&NULL)
    }
}

impl std::ops::IndexMut<usize> for Value {
    /// Auto-vivifying access; see [`Value::at`].
    fn index_mut(&mut self, index: usize) -> &mut Value {
        self.at(index)
    }
}

impl std::ops::IndexMut<&str> for Value {
    /// Auto-vivifying access; see [`Value::at_key`].
    fn index_mut(&mut self, key: &str) -> &mut Value {
        self.at_key(key)
    }
}

/// Borrowed cursor over a container's children; see [`Value::iter`].
pub struct Iter<'a>(IterRepr<'a>);

enum IterRepr<'a> {
    Empty,
    Array(std::slice::Iter<'a, Value>),
    Object(indexmap::map::Iter<'a, String, Value>),
}

impl<'a> Iterator for Iter<'a> {
    type Item = (Option<&'a str>, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.0 {
            IterRepr::Empty => None,
            IterRepr::Array(items) => items.next().map(|v| (None, v)),
            IterRepr::Object(entries) => entries.next().map(|(k, v)| (Some(k.as_str()), v)),
        }
    }
}

/// Mutable cursor over a container's children; see [`Value::iter_mut`].
pub struct IterMut<'a>(IterMutRepr<'a>);

enum IterMutRepr<'a> {
    Empty,
    Array(std::slice::IterMut<'a, Value>),
    Object(indexmap::map::IterMut<'a, String, Value>),
}

impl<'a> Iterator for IterMut<'a> {
    type Item = (Option<&'a str>, &'a mut Value);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.0 {
            IterMutRepr::Empty => None,
            IterMutRepr::Array(items) => items.next().map(|v| (None, v)),
            IterMutRepr::Object(entries) => entries.next().map(|(k, v)| (Some(k.as_str()), v)),
        }
    }
}

impl<'a> IntoIterator for &'a Value {
    type Item = (Option<&'a str>, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
