//! End-to-end decode sessions: selection rounds followed by remainder
//! drains, the way a fuzz target drives the decoder.

use fuzzmux_core::{CandidateSet, Cursor, SLOT_WIDTH, ScalarKind, ScalarValue};
use fuzzmux_tests::session_buffer;
use fuzzmux_utf::{Utf16Chars, Utf8Chars, Width, transcoded_len};

fn byte_kinds() -> CandidateSet {
    CandidateSet::new([ScalarKind::U8, ScalarKind::U16, ScalarKind::U32]).unwrap()
}

#[test]
fn zero_filled_buffer_decodes_the_documented_scenario() {
    // 20 zero bytes: selector 0x00 -> mask 3 -> Selected(0) -> U8(0);
    // cursor lands at offset 17 with 3 bytes left.
    let data = [0u8; 20];
    let mut cursor = Cursor::new(&data);
    let mut ran = false;

    cursor.combine(&byte_kinds(), |value, cursor| {
        assert_eq!(value, ScalarValue::U8(0));
        assert_eq!(cursor.offset(), 17);
        assert_eq!(cursor.remaining(), 3);
        assert_eq!(cursor.drain_rest(), vec![0, 0, 0]);
        ran = true;
    });

    assert!(ran);
}

#[test]
fn miss_leaves_the_slot_bytes_for_later_drains() {
    // 17 bytes, selector 0x03 misses under mask 3: only the selector
    // byte is gone, all 16 remaining bytes are still drainable.
    let mut data = [0xAB; 17];
    data[0] = 0x03;
    let mut cursor = Cursor::new(&data);

    cursor.combine(&byte_kinds(), |_, _| panic!("miss must not decode"));

    assert_eq!(cursor.offset(), 1);
    assert_eq!(cursor.remaining(), 16);
    assert_eq!(cursor.drain_rest(), vec![0xAB; 16]);
}

#[test]
fn selected_value_then_typed_drain_of_the_tail() {
    let buf = session_buffer(0x01, &[0x39, 0x30], &[0x10, 0x20, 0x30, 0x40, 0x99]);
    let mut cursor = Cursor::new(&buf);
    let mut ran = false;

    cursor.combine(&byte_kinds(), |value, cursor| {
        assert_eq!(value, ScalarValue::U16(0x3039));

        let words: Vec<u16> = cursor.drain_scalars();
        assert_eq!(words, vec![0x2010, 0x4030]);
        // 5-byte tail / 2 = 2 words, 1 byte left over
        assert_eq!(cursor.remaining(), 1);
        ran = true;
    });

    assert!(ran);
}

#[test]
fn half_drain_then_view_drain_split_the_tail() {
    let tail = [1u8, 2, 3, 4, 5, 6, 7];
    let buf = session_buffer(0x00, &[], &tail);
    let mut cursor = Cursor::new(&buf);

    cursor.combine(&byte_kinds(), |_, cursor| {
        let front = cursor.drain_half();
        assert_eq!(front, vec![1, 2, 3]);

        let view: &[u8] = cursor.drain_view();
        assert_eq!(view, &[4, 5, 6, 7]);
        assert!(cursor.is_empty());

        // Terminal drains stay safe once empty
        assert!(cursor.drain_rest().is_empty());
    });
}

#[test]
fn two_axis_session_feeds_the_utf_iterator() {
    // Axis A picks the output width, axis B picks the input kind;
    // the tail is UTF-8 for "ok🦀".
    let widths = CandidateSet::new([ScalarKind::U8, ScalarKind::U16, ScalarKind::U32]).unwrap();
    let inputs = CandidateSet::new([ScalarKind::U8, ScalarKind::U16]).unwrap();

    let text = "ok🦀";
    let mut buf = Vec::new();
    buf.push(0x00); // axis A: Selected(0)
    buf.extend_from_slice(&[0u8; SLOT_WIDTH]);
    buf.push(0x00); // axis B: Selected(0) -> u8 input
    buf.extend_from_slice(&[0u8; SLOT_WIDTH]);
    buf.extend_from_slice(text.as_bytes());

    let mut cursor = Cursor::new(&buf);
    let mut ran = false;

    cursor.combine_pair(&widths, &inputs, |_width, input, cursor| {
        assert_eq!(input.kind(), ScalarKind::U8);

        let window: &[u8] = cursor.drain_view();
        let decoded: String = Utf8Chars::new(window).collect();
        assert_eq!(decoded, text);
        assert_eq!(transcoded_len(decoded.chars(), Width::Two), 4);
        ran = true;
    });

    assert!(ran);
}

#[test]
fn wide_input_window_comes_from_the_typed_drain() {
    let inputs = CandidateSet::new([ScalarKind::U16]).unwrap();

    // "A🦀" as UTF-16 LE code units, plus one trailing odd byte the
    // typed drain must leave behind.
    let units: Vec<u16> = "A🦀".encode_utf16().collect();
    let mut tail = Vec::new();
    for unit in &units {
        tail.extend_from_slice(&unit.to_le_bytes());
    }
    tail.push(0xEE);

    let buf = session_buffer(0x00, &[], &tail);
    let mut cursor = Cursor::new(&buf);
    let mut ran = false;

    cursor.combine(&inputs, |_, cursor| {
        let window: Vec<u16> = cursor.drain_scalars();
        assert_eq!(window, units);
        assert_eq!(cursor.remaining(), 1, "odd trailing byte unconsumed");

        let decoded: String = Utf16Chars::new(&window).collect();
        assert_eq!(decoded, "A🦀");
        ran = true;
    });

    assert!(ran);
}

#[test]
fn buffer_below_round_minimum_is_untouched() {
    for len in 0..=SLOT_WIDTH {
        let data = vec![0xFF; len];
        let mut cursor = Cursor::new(&data);
        cursor.combine(&byte_kinds(), |_, _| panic!("must not run"));
        assert_eq!(cursor.offset(), 0, "len {len}");
    }
}
