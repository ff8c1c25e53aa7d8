//! Deterministic JSON encoder.
//!
//! Output does not depend on how a [`Map`] happens to iterate: object members
//! are sorted by their rendered, quoted key. Array elements keep their order.
use alloc::{string::String, vec::Vec};
use core::fmt::{self, Write};

use crate::{
    options::EncodeOptions,
    value::{Array, Map, Value},
};

/// Serializes `value`, compact or tab-indented.
///
/// # Examples
///
/// ```
/// use jsoncursor::{Value, encode};
///
/// let v: Value = [("b", Value::from(1)), ("a", Value::from(vec![Value::Null]))]
///     .into_iter()
///     .collect();
/// assert_eq!(encode(&v, false), r#"{"a":[null],"b":1}"#);
/// assert_eq!(encode(&v, true), "{\n\t\"a\": [\n\t\tnull\n\t],\n\t\"b\": 1\n}");
/// ```
#[must_use]
pub fn encode(value: &Value, pretty: bool) -> String {
    encode_with_options(value, EncodeOptions { pretty })
}

/// Serializes `value` according to `options`.
#[must_use]
pub fn encode_with_options(value: &Value, options: EncodeOptions) -> String {
    let mut out = String::new();
    write_value(&mut out, value, options);
    out
}

/// Appends the encoding of `value` to `out`.
pub fn write_value(out: &mut String, value: &Value, options: EncodeOptions) {
    // Writing into a `String` never fails.
    let _ = write_to(out, value, options);
}

/// Streams the encoding of `value` into any [`core::fmt::Write`].
///
/// # Errors
///
/// Only the errors `out` itself reports.
pub(crate) fn write_to<W: Write>(out: &mut W, value: &Value, options: EncodeOptions) -> fmt::Result {
    Encoder {
        out,
        pretty: options.pretty,
    }
    .value(value, 0)
}

struct Encoder<'out, W> {
    out: &'out mut W,
    pretty: bool,
}

impl<W: Write> Encoder<'_, W> {
    fn value(&mut self, value: &Value, depth: usize) -> fmt::Result {
        match value {
            Value::Null => self.out.write_str("null"),
            Value::Boolean(b) => self.out.write_str(if *b { "true" } else { "false" }),
            Value::Number(n) => write_number(*n, self.out),
            Value::String(s) => write_escaped_string(s, self.out),
            Value::Array(arr) => self.array(arr, depth),
            Value::Object(map) => self.object(map, depth),
        }
    }

    fn array(&mut self, arr: &Array, depth: usize) -> fmt::Result {
        if arr.is_empty() {
            return self.out.write_str("[]");
        }
        self.out.write_char('[')?;
        for (i, v) in arr.iter().enumerate() {
            if i > 0 {
                self.out.write_char(',')?;
            }
            self.newline(depth + 1)?;
            self.value(v, depth + 1)?;
        }
        self.newline(depth)?;
        self.out.write_char(']')
    }

    fn object(&mut self, map: &Map, depth: usize) -> fmt::Result {
        if map.is_empty() {
            return self.out.write_str("{}");
        }
        let mut members: Vec<(String, &Value)> = map
            .iter()
            .map(|(k, v)| {
                let mut key = String::with_capacity(k.len() + 2);
                let _ = write_escaped_string(k, &mut key);
                (key, v)
            })
            .collect();
        members.sort_by(|a, b| a.0.cmp(&b.0));

        self.out.write_char('{')?;
        for (i, (key, v)) in members.iter().enumerate() {
            if i > 0 {
                self.out.write_char(',')?;
            }
            self.newline(depth + 1)?;
            self.out.write_str(key)?;
            self.out.write_str(if self.pretty { ": " } else { ":" })?;
            self.value(v, depth + 1)?;
        }
        self.newline(depth)?;
        self.out.write_char('}')
    }

    fn newline(&mut self, depth: usize) -> fmt::Result {
        if self.pretty {
            self.out.write_char('\n')?;
            for _ in 0..depth {
                self.out.write_char('\t')?;
            }
        }
        Ok(())
    }
}

/// Integral doubles in the `i64` range print without a fraction. Non-finite
/// doubles have no JSON form and print as `null`.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn write_number<W: Write>(n: f64, out: &mut W) -> fmt::Result {
    if !n.is_finite() {
        out.write_str("null")
    } else if n >= i64::MIN as f64 && n < i64::MAX as f64 && (n as i64) as f64 == n {
        // Same as `n.fract() == 0.0` within this range; `fract` needs std.
        write!(out, "{}", n as i64)
    } else {
        write!(out, "{n}")
    }
}

/// Writes `src` as a quoted JSON string.
///
/// Only the quote, backslash, slash, backspace, form feed, newline, carriage
/// return and tab are escaped. Everything else, other control characters
/// included, is written as is.
fn write_escaped_string<W: Write>(src: &str, out: &mut W) -> fmt::Result {
    out.write_char('"')?;
    for c in src.chars() {
        match c {
            '"' => out.write_str("\\\"")?,
            '\\' => out.write_str("\\\\")?,
            '/' => out.write_str("\\/")?,
            '\u{8}' => out.write_str("\\b")?,
            '\u{C}' => out.write_str("\\f")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            _ => out.write_char(c)?,
        }
    }
    out.write_char('"')
}
