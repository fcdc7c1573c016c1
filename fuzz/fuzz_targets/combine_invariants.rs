#![no_main]

use libfuzzer_sys::fuzz_target;

use fuzzmux_core::{CandidateSet, Cursor, SLOT_WIDTH, ScalarKind};

// Fuzz target: byte-accounting invariants of the combinator.
//
// Runs a single-axis and a two-axis round over every input and checks
// the exact consumption contract:
// - short buffer  -> zero bytes consumed, no callback
// - miss          -> exactly 1 byte consumed, no callback
// - hit           -> exactly 1 + SLOT_WIDTH bytes consumed per axis
//
// Corpus replay stability depends on these counts never drifting.
fuzz_target!(|data: &[u8]| {
    let set = CandidateSet::new(ScalarKind::ALL.to_vec()).unwrap();

    let mut cursor = Cursor::new(data);
    let mut hits = 0usize;
    cursor.combine(&set, |_, _| hits += 1);

    let consumed = cursor.offset();
    if data.len() < 1 + SLOT_WIDTH {
        assert_eq!(consumed, 0);
        assert_eq!(hits, 0);
    } else if hits == 1 {
        assert_eq!(consumed, 1 + SLOT_WIDTH);
    } else {
        assert_eq!(hits, 0);
        assert_eq!(consumed, 1);
    }
    assert_eq!(consumed + cursor.remaining(), data.len());

    // Two-axis form over a fresh cursor: axis A's outcome is
    // unchanged by the nesting, and axis B never runs without A.
    let mut pair_cursor = Cursor::new(data);
    let mut pair_hits = 0usize;
    pair_cursor.combine_pair(&set, &set, |_, _, _| pair_hits += 1);

    if hits == 0 {
        assert_eq!(pair_hits, 0);
        assert_eq!(pair_cursor.offset(), consumed);
    } else {
        assert!(pair_cursor.offset() >= consumed);
        assert!(pair_cursor.offset() <= 2 * (1 + SLOT_WIDTH));
    }
    assert_eq!(pair_cursor.offset() + pair_cursor.remaining(), data.len());
});
