//! Fixed-width slot decoding.

use crate::cursor::Cursor;
use crate::scalar::{ScalarKind, ScalarValue};

/// Width of the fixed decode slot, in bytes.
///
/// Every selected candidate is decoded from a region of exactly this
/// size, and the cursor advances by exactly this much afterwards —
/// never by the candidate's own width. The fixed stride keeps the
/// byte offsets of everything after the slot identical no matter
/// which candidate was selected, so swapping a `u8` candidate for a
/// `u64` does not reshuffle the meaning of the rest of a corpus
/// entry.
pub const SLOT_WIDTH: usize = 16;

/// Decode one value of `kind` from the slot at the current offset.
///
/// Copies `kind.width()` bytes from the front of the slot (the value
/// is left-aligned; the tail of the slot is skipped, not reused) and
/// advances the cursor by the full [`SLOT_WIDTH`].
///
/// # Panics
///
/// Panics if fewer than [`SLOT_WIDTH`] bytes remain — the combinator
/// checks `remaining >= 1 + SLOT_WIDTH` before starting a round, so a
/// violation here is a caller bug.
pub fn decode_slot(cursor: &mut Cursor<'_>, kind: ScalarKind) -> ScalarValue {
    assert!(
        cursor.remaining() >= SLOT_WIDTH,
        "decode_slot requires a full {SLOT_WIDTH}-byte slot"
    );

    let value = kind.decode(cursor.rest());
    cursor.advance(SLOT_WIDTH);
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_by_slot_width_for_narrow_kinds() {
        let data = [0u8; 32];
        let mut cursor = Cursor::new(&data);
        let value = decode_slot(&mut cursor, ScalarKind::U8);
        assert_eq!(value, ScalarValue::U8(0));
        assert_eq!(cursor.offset(), SLOT_WIDTH);
    }

    #[test]
    fn advances_by_slot_width_for_full_width_kinds() {
        let data = [0xFF; SLOT_WIDTH];
        let mut cursor = Cursor::new(&data);
        let value = decode_slot(&mut cursor, ScalarKind::U128);
        assert_eq!(value, ScalarValue::U128(u128::MAX));
        assert_eq!(cursor.offset(), SLOT_WIDTH);
        assert!(cursor.is_empty());
    }

    #[test]
    fn value_comes_from_the_slot_front() {
        let mut data = [0u8; 20];
        data[0] = 0x34;
        data[1] = 0x12;
        let mut cursor = Cursor::new(&data);
        let value = decode_slot(&mut cursor, ScalarKind::U16);
        assert_eq!(value, ScalarValue::U16(0x1234));
    }

    #[test]
    fn slot_tail_is_skipped_not_reused() {
        let mut data = [0u8; SLOT_WIDTH + 4];
        // Bytes 1..16 differ, but a u8 decode must not see them and
        // the next read must start at offset 16 regardless.
        data[1] = 0xAA;
        data[SLOT_WIDTH] = 0x99;
        let mut cursor = Cursor::new(&data);
        assert_eq!(decode_slot(&mut cursor, ScalarKind::U8), ScalarValue::U8(0));
        assert_eq!(cursor.consume_byte(), 0x99);
    }

    #[test]
    fn bool_slot_decodes_low_bit_and_still_strides() {
        let mut data = [0u8; SLOT_WIDTH];
        data[0] = 0x03;
        let mut cursor = Cursor::new(&data);
        assert_eq!(
            decode_slot(&mut cursor, ScalarKind::Bool),
            ScalarValue::Bool(true)
        );
        assert!(cursor.is_empty());
    }

    #[test]
    #[should_panic(expected = "full 16-byte slot")]
    fn partial_slot_is_fatal() {
        let data = [0u8; SLOT_WIDTH - 1];
        let mut cursor = Cursor::new(&data);
        let _ = decode_slot(&mut cursor, ScalarKind::U8);
    }
}
