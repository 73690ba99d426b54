//! C literal encoding for table values.
//!
//! Absent strings become `NULL`, never `""`. Flags are plain `0`/`1` ints so
//! every table row is a flat initializer list.

use std::fmt::Write;

use crate::suite::NumberLiteral;

pub const NULL_LITERAL: &str = "NULL";

/// Escapes `raw` for the inside of a C string literal.
///
/// Single left-to-right pass: a backslash in the input is written out as
/// `\\` exactly once and never revisited, so nothing is double-escaped.
pub fn escape_c_string(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut after_question = false;
    for ch in raw.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // `??x` is a trigraph under -std=c99.
            '?' if after_question => out.push_str("\\?"),
            c if c.is_ascii_control() => {
                let _ = write!(out, "\\{:03o}", c as u32);
            }
            c => out.push(c),
        }
        after_question = ch == '?';
    }
    out
}

pub fn string_literal(raw: &str) -> String {
    format!("\"{}\"", escape_c_string(raw))
}

pub fn optional_string_literal(value: Option<&str>) -> String {
    match value {
        Some(raw) => string_literal(raw),
        None => NULL_LITERAL.to_string(),
    }
}

/// The number's source text, with YAML's non-finite spellings mapped onto
/// the `<math.h>` macros.
pub fn number_literal(number: &NumberLiteral) -> String {
    match number.as_str() {
        ".inf" | "+.inf" => "INFINITY".to_string(),
        "-.inf" => "-INFINITY".to_string(),
        ".nan" => "NAN".to_string(),
        text => text.to_string(),
    }
}

/// Absent numbers in numeric columns are `0`; C has no null double.
pub fn optional_number_literal(number: Option<&NumberLiteral>) -> String {
    number.map_or_else(|| "0".to_string(), number_literal)
}

pub fn flag_literal(flag: bool) -> &'static str {
    if flag {
        "1"
    } else {
        "0"
    }
}

pub fn int_literal(value: i64) -> String {
    value.to_string()
}
