#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use fuzzmux_core::Cursor;

// Fuzz target: remainder extraction accounting.
//
// An arbitrary-derived plan applies a sequence of drain modes to one
// buffer and checks, after every step, that the cursor's byte
// accounting holds and no drain ever rewinds or over-consumes.

#[derive(Arbitrary, Debug, Clone, Copy)]
enum DrainMode {
    Rest,
    Words,
    Quads,
    Half,
    View,
}

#[derive(Arbitrary, Debug)]
struct DrainPlan<'a> {
    modes: Vec<DrainMode>,
    data: &'a [u8],
}

fuzz_target!(|plan: DrainPlan<'_>| {
    let mut cursor = Cursor::new(plan.data);

    for &mode in plan.modes.iter().take(16) {
        let before = cursor.remaining();

        match mode {
            DrainMode::Rest => {
                let rest = cursor.drain_rest();
                assert_eq!(rest.len(), before);
                assert!(cursor.is_empty());
            }
            DrainMode::Words => {
                let words: Vec<u16> = cursor.drain_scalars();
                assert_eq!(words.len(), before / 2);
                assert_eq!(cursor.remaining(), before % 2);
            }
            DrainMode::Quads => {
                let quads: Vec<u32> = cursor.drain_scalars();
                assert_eq!(quads.len(), before / 4);
                assert_eq!(cursor.remaining(), before % 4);
            }
            DrainMode::Half => {
                let front = cursor.drain_half();
                assert_eq!(front.len(), before / 2);
                assert_eq!(cursor.remaining(), before - before / 2);
            }
            DrainMode::View => {
                let view: &[u8] = cursor.drain_view();
                assert_eq!(view.len(), before);
                assert!(cursor.is_empty());
            }
        }

        assert!(cursor.remaining() <= before, "drains never rewind");
        assert_eq!(cursor.offset() + cursor.remaining(), plan.data.len());
    }

    // Terminal drains are idempotent once the cursor is empty
    if cursor.is_empty() {
        assert!(cursor.drain_rest().is_empty());
        assert!(cursor.drain_rest().is_empty());
    }
});
