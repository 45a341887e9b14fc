//! JSON serialization.
//!
//! The semantic inverse of the parser: re-parsing the output of
//! [`serialize`] yields an equal tree (up to object key order, which the
//! map already fixes, and double precision, which the 17-digit format
//! preserves exactly).
//!
//! Output is pure ASCII: every codepoint below 0x20 or at 0x80 and above is
//! written as a `\uXXXX` escape, with codepoints beyond the Basic
//! Multilingual Plane split into a UTF-16 surrogate pair.

use crate::json::value::Value;
use crate::unicode::codec;

/// Serialize a value tree to JSON text.
///
/// Never fails: every reachable `Value` is serializable.
pub fn serialize(value: &Value) -> String {
    let mut out = String::new();
    write_value(value, &mut out);
    out
}

fn write_value(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Int(n) => out.push_str(&n.to_string()),
        Value::Double(d) => write_double(*d, out),
        Value::String(s) => write_string(s, out),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(item, out);
            }
            out.push(']');
        }
        Value::Object(members) => {
            out.push('{');
            for (i, (key, member)) in members.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(key, out);
                out.push(':');
                write_value(member, out);
            }
            out.push('}');
        }
    }
}

/// Write a string with JSON escaping.
///
/// Walks the stored UTF-8 one codepoint at a time; the payload is already
/// validated, so decoding is unchecked.
fn write_string(s: &str, out: &mut String) {
    out.push('"');
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let (cp, len) = codec::decode_unchecked(&bytes[i..]);
        i += len;
        match cp {
            0x5C => out.push_str("\\\\"),
            0x22 => out.push_str("\\\""),
            0x08 => out.push_str("\\b"),
            0x0C => out.push_str("\\f"),
            0x0A => out.push_str("\\n"),
            0x0D => out.push_str("\\r"),
            0x09 => out.push_str("\\t"),
            cp if cp < 0x20 || cp >= 0x80 => {
                if cp <= 0xFFFF {
                    out.push_str(&format!("\\u{cp:04x}"));
                } else {
                    let hi = 0xD800 + ((cp - 0x10000) >> 10);
                    let lo = 0xDC00 + ((cp - 0x10000) & 0x3FF);
                    out.push_str(&format!("\\u{hi:04x}\\u{lo:04x}"));
                }
            }
            cp => out.push(cp as u8 as char),
        }
    }
    out.push('"');
}

fn write_double(d: f64, out: &mut String) {
    // JSON has no lexeme for NaN or infinities.
    if !d.is_finite() {
        out.push_str("null");
        return;
    }
    out.push_str(&format_double(d));
}

/// Format a finite double with 17 significant digits.
///
/// 17 digits uniquely determine every `f64` bit pattern, so re-parsing the
/// text restores the exact value. Fixed notation is used when the decimal
/// exponent lies in `[-4, 17)`, scientific otherwise, with trailing zeros
/// stripped. If the result carries neither `.` nor an exponent, `.0` is
/// appended so the text re-parses as a double rather than an integer.
fn format_double(d: f64) -> String {
    let sci = format!("{d:.16e}");
    let Some((mantissa, exp_text)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp_text.parse().unwrap_or(0);

    let mut text = if (-4..17).contains(&exp) {
        let precision = (16 - exp).max(0) as usize;
        trim_fraction(format!("{d:.precision$}"))
    } else {
        let mantissa = trim_fraction(mantissa.to_string());
        format!("{mantissa}e{exp}")
    };

    if !text.contains('.') && !text.contains('e') {
        text.push_str(".0");
    }
    text
}

fn trim_fraction(s: String) -> String {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
