//! Tests for the serializer: compact and pretty forms, custom
//! configurations, escaping, and long-string truncation.

use jot_core::{parse, DumpConfig, Value};

fn j(text: &str) -> Value {
    parse(text).expect("test input must parse")
}

// ============================================================================
// Pretty form
// ============================================================================

#[test]
fn format_scalars() {
    assert_eq!(Value::default().format(), "null");
    assert_eq!(Value::from(true).format(), "true");
    assert_eq!(Value::from(7).format(), "7");
    assert_eq!(Value::from("x").format(), "\"x\"");
}

#[test]
fn format_indents_one_level_per_depth() {
    let mut v = Value::from(true);

    v[0] = "abc".into();
    assert_eq!(v.format(), "[\n\t\"abc\"\n]");

    v["key"] = "value".into();
    assert_eq!(v.format(), "{\n\t\"key\":\"value\"\n}");

    v[0]["key"]["foo"] = "bar".into();
    assert_eq!(v.dump(), "[{\"key\":{\"foo\":\"bar\"}}]");
    assert_eq!(
        v.format(),
        "[\n\t{\n\t\t\"key\":{\n\t\t\t\"foo\":\"bar\"\n\t\t}\n\t}\n]"
    );
}

#[test]
fn format_empty_containers() {
    assert_eq!(j("[]").format(), "[\n]");
    assert_eq!(j("{}").format(), "{\n}");
}

// ============================================================================
// Compact form and sub-tree dumps
// ============================================================================

#[test]
fn dump_any_subtree() {
    let v = j("{\"book_list\":{\"book\":[{\"title\":\"title 1\"},{\"title\":\"title 2\"}]}}");
    assert_eq!(
        v.dump(),
        "{\"book_list\":{\"book\":[{\"title\":\"title 1\"},{\"title\":\"title 2\"}]}}"
    );
    assert_eq!(
        v["book_list"].dump(),
        "{\"book\":[{\"title\":\"title 1\"},{\"title\":\"title 2\"}]}"
    );
    assert_eq!(
        v["book_list"]["book"].dump(),
        "[{\"title\":\"title 1\"},{\"title\":\"title 2\"}]"
    );
    assert_eq!(v["book_list"]["book"][0].dump(), "{\"title\":\"title 1\"}");
    assert_eq!(v["book_list"]["book"][1].dump(), "{\"title\":\"title 2\"}");
}

#[test]
fn number_and_bool_emit_raw_text() {
    assert_eq!(Value::Number("1e5".to_string()).dump(), "1e5");
    assert_eq!(Value::Number("+0.50".to_string()).dump(), "+0.50");
    assert_eq!(Value::Bool(true).dump(), "true");
    assert_eq!(Value::Null.dump(), "null");
}

// ============================================================================
// Custom configurations
// ============================================================================

#[test]
fn custom_indent_and_eol() {
    let v = j("{a:[1]}");
    let config = DumpConfig {
        indent_unit: "  ".to_string(),
        eol: "\r\n".to_string(),
        escape_high_bytes: false,
        truncate_long_strings: false,
    };
    assert_eq!(
        v.dump_with(&config),
        "{\r\n  \"a\":[\r\n    1\r\n  ]\r\n}"
    );
}

#[test]
fn display_is_compact_dump() {
    let v = j("{a:1,b:[true]}");
    assert_eq!(format!("{v}"), v.dump());
}

// ============================================================================
// Escaping
// ============================================================================

#[test]
fn escape_table() {
    let v = Value::from("1\"2'3\\4/5\u{8}6\u{c}7\n8\r9\t0");
    assert_eq!(v.dump(), "\"1\\\"2'3\\\\4\\/5\\b6\\f7\\n8\\r9\\t0\"");
}

#[test]
fn high_bytes_escape_byte_wise() {
    // One escape per UTF-8 byte, not per code point.
    let v = Value::from("测");
    assert_eq!(v.dump(), "\"测\"");
    assert_eq!(v.dump_ascii(), "\"\\u00E6\\u00B5\\u008B\"");

    // DEL is the first escaped byte.
    let v = Value::from("a\u{7f}b");
    assert_eq!(v.dump_ascii(), "\"a\\u007Fb\"");

    // ASCII below DEL is untouched.
    let v = Value::from("plain");
    assert_eq!(v.dump_ascii(), "\"plain\"");
}

#[test]
fn format_ascii_combines_indent_and_escape() {
    let v = j("{k:测}");
    assert_eq!(v.format_ascii(), "{\n\t\"k\":\"\\u00E6\\u00B5\\u008B\"\n}");
}

// ============================================================================
// Long-string truncation
// ============================================================================

#[test]
fn pretty_truncates_beyond_1024_bytes() {
    let long = "a".repeat(2000);
    let v = Value::from(long.as_str());

    let expected = format!("\"{}...\"(2000 bytes)", "a".repeat(1024));
    assert_eq!(v.format(), expected);

    // Compact (the persistence form) never truncates.
    assert_eq!(v.dump(), format!("\"{long}\""));
}

#[test]
fn truncation_respects_char_boundaries() {
    // 512 three-byte chars = 1536 bytes; the cut backs off to a boundary.
    let long = "测".repeat(512);
    let v = Value::from(long.as_str());
    let rendered = v.format();
    assert!(rendered.ends_with("...\"(1536 bytes)"));
    assert!(rendered.starts_with(&format!("\"{}", "测".repeat(341))));
}

#[test]
fn exactly_1024_bytes_is_not_truncated() {
    let exact = "x".repeat(1024);
    let v = Value::from(exact.as_str());
    assert_eq!(v.format(), format!("\"{exact}\""));
}

#[test]
fn truncation_applies_inside_containers() {
    let mut v = Value::default();
    v["blob"] = "b".repeat(1500).into();
    let rendered = v.format();
    assert!(rendered.contains("...\"(1500 bytes)"));

    let config = DumpConfig {
        truncate_long_strings: false,
        ..DumpConfig::pretty()
    };
    assert!(!v.dump_with(&config).contains("bytes)"));
}
