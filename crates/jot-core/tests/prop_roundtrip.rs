//! Property-based tests over generated document trees.
//!
//! Uses the `proptest` crate to generate random [`Value`] trees and check
//! the core invariants:
//!
//! - `parse_strict(v.dump()) == v` — the compact form round-trips under
//!   structural equality.
//! - `parse(v.dump()) == v` — lenient mode accepts everything strict mode
//!   emits.
//! - `parse(v.dump_ascii()) == v` — the byte-wise `\u00XX` escape form
//!   reassembles the original bytes.
//! - Clones are deep: mutating a clone never affects the original.
//! - Queries never mutate the queried tree.
//! - Typed accessors never panic, whatever the value.
//!
//! Strategy notes: strings exclude NUL (the parser treats a raw NUL byte
//! as end of input) and numbers are generated from formatted integers and
//! small decimals so their text is valid under the strict grammar.

use proptest::prelude::*;

use jot_core::{parse, parse_strict, Value};

// ============================================================================
// Strategies
// ============================================================================

/// Object keys: short, printable, occasionally unicode.
fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[a-zA-Z_][a-zA-Z0-9_]{0,12}",
        1 => "[a-z]{0,4}[\u{00e9}\u{4f60}\u{597d}][a-z]{0,4}",
        1 => Just(String::new()),
    ]
}

/// String payloads, biased toward the cases that stress escaping and the
/// number/keyword boundary.
fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[a-zA-Z0-9 :,/{}\\[\\]]{0,20}",
        1 => Just(String::new()),
        1 => Just("true".to_string()),
        1 => Just("null".to_string()),
        1 => Just("42".to_string()),
        1 => Just("192.168.0.101".to_string()),
        1 => Just("line1\nline2\ttabbed".to_string()),
        1 => Just("quote\" back\\slash /slash".to_string()),
        1 => Just("caf\u{00e9} \u{4f60}\u{597d}".to_string()),
        1 => Just("\u{8}\u{c}\r mixed".to_string()),
    ]
}

/// Number payloads as text, always valid under the strict grammar.
fn arb_number_text() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => (-1_000_000i64..1_000_000i64).prop_map(|n| n.to_string()),
        2 => (-100_000i64..100_000i64, 1u32..4u32).prop_map(|(mantissa, decimals)| {
            format!("{}.{:0width$}", mantissa / 100, mantissa.unsigned_abs() % 100, width = decimals as usize)
        }),
        1 => (0i64..1000i64, 0i64..20i64).prop_map(|(m, e)| format!("{m}e{e}")),
        1 => Just("0".to_string()),
        1 => Just("1.0".to_string()),
    ]
}

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        1 => Just(Value::Null),
        1 => any::<bool>().prop_map(Value::Bool),
        2 => arb_number_text().prop_map(Value::Number),
        3 => arb_text().prop_map(Value::String),
    ]
}

/// Trees up to `depth` levels of nesting.
fn arb_value_inner(depth: u32) -> BoxedStrategy<Value> {
    if depth == 0 {
        arb_scalar().boxed()
    } else {
        prop_oneof![
            4 => arb_scalar(),
            2 => prop::collection::vec(arb_value_inner(depth - 1), 0..5)
                .prop_map(Value::Array),
            2 => prop::collection::vec((arb_key(), arb_value_inner(depth - 1)), 0..5)
                .prop_map(|pairs| {
                    let mut obj = Value::empty(jot_core::Kind::Object);
                    for (key, value) in pairs {
                        obj.insert_key(key, value, usize::MAX);
                    }
                    obj
                }),
        ]
        .boxed()
    }
}

fn arb_value() -> BoxedStrategy<Value> {
    arb_value_inner(3)
}

/// Query paths over arbitrary trees.
fn arb_path() -> impl Strategy<Value = String> {
    "([a-z0-9*]{0,4}/){0,3}[a-z0-9*]{0,4}"
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Core round-trip: the compact dump parses back, strictly, to an
    /// equal tree.
    #[test]
    fn strict_roundtrip(value in arb_value()) {
        let dumped = value.dump();
        let reparsed = parse_strict(&dumped);
        prop_assert!(reparsed.is_ok(), "strict reparse of {:?} failed", dumped);
        prop_assert_eq!(&reparsed.unwrap(), &value, "dump was {}", dumped);
    }

    /// Lenient mode is a superset: everything the serializer emits is
    /// accepted there too.
    #[test]
    fn lenient_accepts_dumped_form(value in arb_value()) {
        let dumped = value.dump();
        let reparsed = parse(&dumped);
        prop_assert!(reparsed.is_ok(), "lenient reparse of {:?} failed", dumped);
        prop_assert_eq!(reparsed.unwrap(), value);
    }

    /// The byte-wise escape form reassembles the original bytes exactly.
    #[test]
    fn ascii_escape_roundtrip(value in arb_value()) {
        let dumped = value.dump_ascii();
        prop_assert!(dumped.is_ascii(), "dump_ascii left a high byte in {:?}", dumped);
        let reparsed = parse_strict(&dumped);
        prop_assert!(reparsed.is_ok(), "reparse of {:?} failed", dumped);
        prop_assert_eq!(reparsed.unwrap(), value);
    }

    /// The pretty form round-trips as well (truncation aside, which the
    /// strategy cannot trigger: generated strings stay short).
    #[test]
    fn pretty_roundtrip(value in arb_value()) {
        let formatted = value.format();
        let reparsed = parse_strict(&formatted);
        prop_assert!(reparsed.is_ok(), "reparse of {:?} failed", formatted);
        prop_assert_eq!(reparsed.unwrap(), value);
    }

    /// Clones are deep: mutating the clone leaves the original untouched.
    #[test]
    fn clone_is_independent(value in arb_value()) {
        let fingerprint = value.dump();
        let mut copy = value.clone();
        prop_assert_eq!(copy.dump(), fingerprint.clone());

        copy.push("mutation");
        copy["injected"] = true.into();
        prop_assert_eq!(value.dump(), fingerprint);
    }

    /// Queries never coerce or otherwise change the queried tree.
    #[test]
    fn query_never_mutates(value in arb_value(), path in arb_path()) {
        let before = value.dump();
        let _ = value.query(&path);
        prop_assert_eq!(value.dump(), before);
    }

    /// A wildcard result is always an array.
    #[test]
    fn wildcard_yields_array(value in arb_value()) {
        prop_assert!(value.query("*").is_array());
    }

    /// Typed accessors are total: no value makes them panic.
    #[test]
    fn accessors_never_panic(value in arb_value()) {
        let _ = value.as_bool();
        let _ = value.as_i64();
        let _ = value.as_u64();
        let _ = value.as_f64();
        let _ = value.as_string();
        let _ = value.len();
        let _ = value.keys().count();
    }

    /// Parsing arbitrary text never panics, in either mode.
    #[test]
    fn parser_never_panics(text in "[ -~\t\n\r\u{00e9}\u{4f60}]{0,40}") {
        let _ = parse(&text);
        let _ = parse_strict(&text);
    }
}
