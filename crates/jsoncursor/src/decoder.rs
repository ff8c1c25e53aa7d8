//! Recursive-descent JSON decoder.
//!
//! The input is decoded into `char`s once and walked with a
//! [`Cursor`]. Every production dispatches on the next character without
//! consuming it, so the decoder never backtracks further than a
//! [`Cursor::peek_n`] lookahead. The single exception is numbers: a copy of
//! the cursor taken at the start of the lexeme is used to slice it out after
//! the grammar has been checked.
//!
//! Grammar notes
//! - Whitespace is the fixed set skipped by [`Cursor::skip_whitespace`].
//! - Strings accept any character other than `"` and `\` verbatim.
//! - Each `\uXXXX` escape is decoded on its own. Surrogate code units are
//!   not scalar values and are rejected; pairs are never recombined.
//! - Numbers follow RFC 8259 exactly (no leading zeros, digits required
//!   after `.` and the exponent marker) and are parsed as `f64`.
//! - Duplicate object keys keep the last value.
use alloc::{string::String, vec::Vec};

use crate::{
    DecodeError,
    cursor::Cursor,
    options::DecodeOptions,
    value::{Array, Map, Value},
};

/// Decodes a single JSON value, rejecting anything but whitespace after it.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidInput`] at the first grammar violation.
///
/// # Examples
///
/// ```
/// use jsoncursor::{DecodeError, Value, decode};
///
/// assert_eq!(decode(" [true] ").unwrap(), Value::Array(vec![Value::Boolean(true)]));
/// assert_eq!(decode("{} x"), Err(DecodeError::InvalidInput));
/// ```
pub fn decode(text: &str) -> Result<Value, DecodeError> {
    decode_with_options(text, DecodeOptions::default())
}

/// Like [`decode`], with an explicit nesting limit.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidInput`] at the first grammar violation or
/// when objects and arrays nest deeper than `options.max_depth`.
pub fn decode_with_options(text: &str, options: DecodeOptions) -> Result<Value, DecodeError> {
    let chars: Vec<char> = text.chars().collect();
    trace!(chars = chars.len(), "decoding");

    let mut decoder = Decoder::new(&chars, options);
    decoder.document().inspect_err(|_| {
        debug!(offset = decoder.cursor.position(), "rejected input");
    })
}

struct Decoder<'src> {
    cursor: Cursor<'src, char>,
    depth: usize,
    max_depth: usize,
}

impl<'src> Decoder<'src> {
    fn new(chars: &'src [char], options: DecodeOptions) -> Self {
        Self {
            cursor: Cursor::new(chars),
            depth: 0,
            max_depth: options.max_depth,
        }
    }

    fn document(&mut self) -> Result<Value, DecodeError> {
        self.skip_whitespace();
        let value = self.value()?;
        self.skip_whitespace();
        if self.cursor.has_next() {
            return Err(DecodeError::InvalidInput);
        }
        Ok(value)
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.cursor.peek().copied()
    }

    #[inline]
    fn bump(&mut self) -> Option<char> {
        self.cursor.next().copied()
    }

    fn skip_whitespace(&mut self) {
        self.cursor.skip_whitespace();
    }

    fn expect(&mut self, expected: char) -> Result<(), DecodeError> {
        match self.bump() {
            Some(c) if c == expected => Ok(()),
            _ => Err(DecodeError::InvalidInput),
        }
    }

    fn value(&mut self) -> Result<Value, DecodeError> {
        match self.peek() {
            Some('{') => self.object(),
            Some('[') => self.array(),
            Some('"') => self.string().map(Value::String),
            Some('-' | '0'..='9') => self.number(),
            Some('t' | 'f') => self.boolean(),
            Some('n') => self.null(),
            _ => Err(DecodeError::InvalidInput),
        }
    }

    fn descend(&mut self) -> Result<(), DecodeError> {
        if self.depth >= self.max_depth {
            return Err(DecodeError::InvalidInput);
        }
        self.depth += 1;
        Ok(())
    }

    fn object(&mut self) -> Result<Value, DecodeError> {
        self.expect('{')?;
        self.descend()?;
        let mut map = Map::new();

        self.skip_whitespace();
        if self.peek() == Some('}') {
            self.cursor.advance();
            self.depth -= 1;
            return Ok(Value::Object(map));
        }

        loop {
            let key = self.string()?;
            self.skip_whitespace();
            self.expect(':')?;
            self.skip_whitespace();
            let value = self.value()?;
            map.insert(key, value);
            self.skip_whitespace();
            match self.bump() {
                Some(',') => self.skip_whitespace(),
                Some('}') => break,
                _ => return Err(DecodeError::InvalidInput),
            }
        }

        self.depth -= 1;
        Ok(Value::Object(map))
    }

    fn array(&mut self) -> Result<Value, DecodeError> {
        self.expect('[')?;
        self.descend()?;
        let mut elements = Array::new();

        self.skip_whitespace();
        if self.peek() == Some(']') {
            self.cursor.advance();
            self.depth -= 1;
            return Ok(Value::Array(elements));
        }

        loop {
            elements.push(self.value()?);
            self.skip_whitespace();
            match self.bump() {
                Some(',') => self.skip_whitespace(),
                Some(']') => break,
                _ => return Err(DecodeError::InvalidInput),
            }
        }

        self.depth -= 1;
        Ok(Value::Array(elements))
    }

    fn string(&mut self) -> Result<String, DecodeError> {
        self.expect('"')?;
        let mut out = String::new();
        loop {
            match self.bump().ok_or(DecodeError::InvalidInput)? {
                '"' => return Ok(out),
                '\\' => out.push(self.escape()?),
                c => out.push(c),
            }
        }
    }

    fn escape(&mut self) -> Result<char, DecodeError> {
        match self.bump() {
            Some('"') => Ok('"'),
            Some('\\') => Ok('\\'),
            Some('/') => Ok('/'),
            Some('b') => Ok('\u{8}'),
            Some('f') => Ok('\u{C}'),
            Some('n') => Ok('\n'),
            Some('r') => Ok('\r'),
            Some('t') => Ok('\t'),
            Some('u') => self.unicode_escape(),
            _ => Err(DecodeError::InvalidInput),
        }
    }

    fn unicode_escape(&mut self) -> Result<char, DecodeError> {
        let digits = self.cursor.next_n(4);
        if digits.len() != 4 {
            return Err(DecodeError::InvalidInput);
        }
        let code = digits
            .iter()
            .try_fold(0u32, |acc, c| Some(acc * 16 + c.to_digit(16)?))
            .ok_or(DecodeError::InvalidInput)?;
        char::from_u32(code).ok_or(DecodeError::InvalidInput)
    }

    fn number(&mut self) -> Result<Value, DecodeError> {
        let start = self.cursor;

        if self.peek() == Some('-') {
            self.cursor.advance();
        }
        match self.bump() {
            Some('0') => {}
            Some('1'..='9') => {
                self.digits();
            }
            _ => return Err(DecodeError::InvalidInput),
        }
        if self.peek() == Some('.') {
            self.cursor.advance();
            self.required_digits()?;
        }
        if self.peek().is_some_and(|c| c.eq_ignore_ascii_case(&'e')) {
            self.cursor.advance();
            if matches!(self.peek(), Some('+' | '-')) {
                self.cursor.advance();
            }
            self.required_digits()?;
        }

        let lexeme: String = start
            .peek_n(self.cursor.position() - start.position())
            .iter()
            .collect();
        lexeme
            .parse::<f64>()
            .map(Value::Number)
            .map_err(|_| DecodeError::InvalidInput)
    }

    fn digits(&mut self) -> usize {
        let mut count = 0;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.cursor.advance();
            count += 1;
        }
        count
    }

    fn required_digits(&mut self) -> Result<(), DecodeError> {
        if self.digits() == 0 {
            return Err(DecodeError::InvalidInput);
        }
        Ok(())
    }

    fn boolean(&mut self) -> Result<Value, DecodeError> {
        if self.literal("true") {
            Ok(Value::Boolean(true))
        } else if self.literal("false") {
            Ok(Value::Boolean(false))
        } else {
            Err(DecodeError::InvalidInput)
        }
    }

    fn null(&mut self) -> Result<Value, DecodeError> {
        if self.literal("null") {
            Ok(Value::Null)
        } else {
            Err(DecodeError::InvalidInput)
        }
    }

    /// Consumes the ASCII `word` if the input continues with it.
    fn literal(&mut self, word: &str) -> bool {
        let ahead = self.cursor.peek_n(word.len());
        if ahead.iter().copied().eq(word.chars()) {
            self.cursor.next_n(word.len());
            true
        } else {
            false
        }
    }
}
