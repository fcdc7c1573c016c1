//! Monotonic position tracker over the fuzz input buffer.

/// Cursor over an immutable fuzz input buffer.
///
/// Tracks `(offset, remaining)` into a borrowed byte slice. The cursor
/// only ever moves forward; `offset() + remaining()` equals the total
/// buffer length at every observation point. One cursor is created per
/// fuzz input, consumed across selection and drain calls, and dropped
/// when the callback chain returns. There is no reset or reuse.
///
/// Underflow is a caller contract violation, not a runtime error:
/// operations that need bytes assert their precondition instead of
/// returning a `Result`. Callers check [`remaining`](Self::remaining)
/// or [`is_empty`](Self::is_empty) first.
#[derive(Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at offset 0 over the given buffer.
    ///
    /// The buffer is only read, never copied or mutated.
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Number of unconsumed bytes.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// True when every byte has been consumed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pos == self.buf.len()
    }

    /// Number of bytes consumed so far.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Consume and return the next byte.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is empty. Callers must check first.
    pub fn consume_byte(&mut self) -> u8 {
        assert!(!self.is_empty(), "consume_byte on empty cursor");
        let byte = self.buf[self.pos];
        self.pos += 1;
        byte
    }

    /// Consume one byte and fold it into `min..=max`.
    ///
    /// Useful when the caller needs a small bounded value (an ASCII
    /// letter, a tiny length) rather than a full scalar slot.
    ///
    /// # Panics
    ///
    /// Panics if `min >= max` or the cursor is empty.
    pub fn consume_byte_in_range(&mut self, min: u8, max: u8) -> u8 {
        assert!(min < max, "empty or inverted range");
        let span = u16::from(max) - u16::from(min) + 1;
        // folded <= max - min, so the cast and the addition both fit
        #[allow(clippy::cast_possible_truncation)]
        let folded = (u16::from(self.consume_byte()) % span) as u8;
        min + folded
    }

    /// The unconsumed tail of the buffer.
    pub(crate) fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    /// Advance past `n` bytes without reading them.
    ///
    /// Internal only; the public surface never rewinds and never
    /// advances past the end.
    pub(crate) fn advance(&mut self, n: usize) {
        debug_assert!(n <= self.remaining());
        self.pos += n;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_cursor_accounts_for_whole_buffer() {
        let cursor = Cursor::new(&[1, 2, 3]);
        assert_eq!(cursor.offset(), 0);
        assert_eq!(cursor.remaining(), 3);
        assert!(!cursor.is_empty());
    }

    #[test]
    fn consume_byte_advances_by_one() {
        let mut cursor = Cursor::new(&[0xAA, 0xBB]);
        assert_eq!(cursor.consume_byte(), 0xAA);
        assert_eq!(cursor.offset(), 1);
        assert_eq!(cursor.consume_byte(), 0xBB);
        assert!(cursor.is_empty());
    }

    #[test]
    fn offset_plus_remaining_is_total() {
        let data = [0u8; 7];
        let mut cursor = Cursor::new(&data);
        for _ in 0..7 {
            cursor.consume_byte();
            assert_eq!(cursor.offset() + cursor.remaining(), data.len());
        }
    }

    #[test]
    #[should_panic(expected = "consume_byte on empty cursor")]
    fn consume_byte_on_empty_is_fatal() {
        let mut cursor = Cursor::new(&[]);
        let _ = cursor.consume_byte();
    }

    #[test]
    fn byte_in_range_stays_in_range() {
        for byte in 0..=u8::MAX {
            let data = [byte];
            let mut cursor = Cursor::new(&data);
            let value = cursor.consume_byte_in_range(b'a', b'z');
            assert!((b'a'..=b'z').contains(&value), "byte {byte} -> {value}");
            assert!(cursor.is_empty());
        }
    }

    #[test]
    fn byte_in_range_is_modular() {
        // span = 26, so 0 -> 'a', 25 -> 'z', 26 wraps back to 'a'
        let mut cursor = Cursor::new(&[0, 25, 26]);
        assert_eq!(cursor.consume_byte_in_range(b'a', b'z'), b'a');
        assert_eq!(cursor.consume_byte_in_range(b'a', b'z'), b'z');
        assert_eq!(cursor.consume_byte_in_range(b'a', b'z'), b'a');
    }

    #[test]
    fn byte_in_range_covers_full_byte_span() {
        let mut cursor = Cursor::new(&[0xFF]);
        assert_eq!(cursor.consume_byte_in_range(0, 255), 0xFF);
    }

    #[test]
    #[should_panic(expected = "empty or inverted range")]
    fn inverted_range_is_fatal() {
        let mut cursor = Cursor::new(&[0]);
        let _ = cursor.consume_byte_in_range(9, 3);
    }
}
