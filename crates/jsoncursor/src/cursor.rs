//! A peekable, backtrackable position over a borrowed sequence.
//!
//! [`Cursor`] pairs a shared slice with a single index. It never mutates the
//! source and is `Copy`, so taking a snapshot before a speculative read and
//! restoring it afterwards is a plain assignment:
//!
//! ```
//! use jsoncursor::Cursor;
//!
//! let chars: Vec<char> = "null".chars().collect();
//! let mut cursor = Cursor::new(&chars);
//!
//! let saved = cursor;
//! assert_eq!(cursor.next_n(2), &['n', 'u']);
//! cursor = saved;
//! assert!(cursor.at_start());
//! ```
//!
//! Invariants
//! - The position is always within `0..=source.len()`.
//! - No operation fails. Moves saturate at the bounds and bulk reads return
//!   fewer elements when the source runs out.
//! - Bulk reads return sub-slices of the source in reading order, both
//!   forward and backward.

/// Characters skipped by [`Cursor::skip_whitespace`].
///
/// Matched by containment, so the trailing `\r\n` pair adds nothing beyond
/// the individual `\r` and `\n` it is made of.
const WHITESPACE: &str = " \t\n\r\r\n";

/// A clamped, copyable position over a borrowed slice of `T`.
#[derive(Debug)]
pub struct Cursor<'src, T> {
    source: &'src [T],
    pos: usize,
}

// Manual impls: the derives would require `T: Clone`/`T: Copy`, but only the
// reference and the index are duplicated.
impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<'src, T> Cursor<'src, T> {
    /// Creates a cursor positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src [T]) -> Self {
        Self { source, pos: 0 }
    }

    /// The current index into the source.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns `true` iff [`Cursor::reverse`] would have no effect.
    #[must_use]
    pub fn at_start(&self) -> bool {
        self.pos == 0
    }

    /// Returns `true` iff [`Cursor::advance`] would have no effect.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.pos == self.source.len()
    }

    /// Returns `true` iff [`Cursor::peek`] would return an element.
    #[must_use]
    pub fn has_next(&self) -> bool {
        !self.at_end()
    }

    /// The element at the current position, without moving.
    #[must_use]
    pub fn peek(&self) -> Option<&'src T> {
        self.source.get(self.pos)
    }

    /// Up to `amount` elements starting at the current position, without
    /// moving.
    #[must_use]
    pub fn peek_n(&self, amount: usize) -> &'src [T] {
        &self.source[self.pos..self.forward_index(amount)]
    }

    /// Up to `amount` elements starting at the current position. The cursor
    /// moves past whatever was returned.
    pub fn next_n(&mut self, amount: usize) -> &'src [T] {
        let start = self.pos;
        self.pos = self.forward_index(amount);
        &self.source[start..self.pos]
    }

    /// The element just before the current position, without moving.
    #[must_use]
    pub fn peek_previous(&self) -> Option<&'src T> {
        self.pos.checked_sub(1).map(|i| &self.source[i])
    }

    /// Steps back one element and returns it. Returns `None`, without
    /// moving, at the start.
    pub fn previous(&mut self) -> Option<&'src T> {
        let item = self.peek_previous()?;
        self.pos -= 1;
        Some(item)
    }

    /// Up to `amount` elements ending at the current position, in reading
    /// order, without moving.
    #[must_use]
    pub fn peek_previous_n(&self, amount: usize) -> &'src [T] {
        &self.source[self.backward_index(amount)..self.pos]
    }

    /// Up to `amount` elements ending at the current position, in reading
    /// order. The cursor moves back to the first returned element.
    pub fn previous_n(&mut self, amount: usize) -> &'src [T] {
        let end = self.pos;
        self.pos = self.backward_index(amount);
        &self.source[self.pos..end]
    }

    /// Moves by a signed `amount`, saturating at either bound.
    pub fn advance_by(&mut self, amount: isize) {
        self.pos = if amount < 0 {
            self.backward_index(amount.unsigned_abs())
        } else {
            self.forward_index(amount.unsigned_abs())
        };
    }

    /// Moves backwards by a signed `amount`, saturating at either bound.
    pub fn reverse_by(&mut self, amount: isize) {
        self.advance_by(amount.saturating_neg());
    }

    /// Moves forward by one unless already at the end.
    pub fn advance(&mut self) {
        self.advance_by(1);
    }

    /// Moves backward by one unless already at the start.
    pub fn reverse(&mut self) {
        self.reverse_by(1);
    }

    /// Every element from the current position to the end, without moving.
    #[must_use]
    pub fn remaining_items(&self) -> &'src [T] {
        &self.source[self.pos..]
    }

    fn forward_index(&self, amount: usize) -> usize {
        self.pos.saturating_add(amount).min(self.source.len())
    }

    fn backward_index(&self, amount: usize) -> usize {
        self.pos.saturating_sub(amount)
    }
}

impl Cursor<'_, char> {
    /// Advances past any run of JSON whitespace.
    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|c| WHITESPACE.contains(*c)) {
            self.advance();
        }
    }
}

impl<'src, T> Iterator for Cursor<'src, T> {
    type Item = &'src T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.peek()?;
        self.pos += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.source.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Cursor<'_, T> {}

impl<T> core::iter::FusedIterator for Cursor<'_, T> {}

impl<'src, T> From<&'src [T]> for Cursor<'src, T> {
    fn from(source: &'src [T]) -> Self {
        Self::new(source)
    }
}

impl<'src, T, const N: usize> From<&'src [T; N]> for Cursor<'src, T> {
    fn from(source: &'src [T; N]) -> Self {
        Self::new(source)
    }
}

impl<'src, T> From<&'src alloc::vec::Vec<T>> for Cursor<'src, T> {
    fn from(source: &'src alloc::vec::Vec<T>) -> Self {
        Self::new(source)
    }
}
