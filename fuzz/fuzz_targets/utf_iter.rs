#![no_main]

use libfuzzer_sys::fuzz_target;

use fuzzmux_core::{CandidateSet, Cursor, ScalarKind, ScalarValue};
use fuzzmux_utf::{Utf16Chars, Utf32Chars, Utf8Chars, Width, transcoded_len};

// Fuzz target: UTF decoding iterators across type combinations.
//
// One corpus entry drives many instantiations of the unit under test:
// axis A selects the output code-unit width, axis B selects the input
// code-unit kind, and the remainder of the buffer becomes the typed
// window the iterator walks.
//
// Catches bugs in:
// - Out-of-bounds reads on truncated multi-unit sequences
// - Non-termination on ill-formed input
// - Surrogate and overlong handling at every width
fuzz_target!(|data: &[u8]| {
    let output_widths =
        CandidateSet::new([ScalarKind::U8, ScalarKind::U16, ScalarKind::U32]).unwrap();
    let input_kinds = CandidateSet::new([
        ScalarKind::U8,
        ScalarKind::I8,
        ScalarKind::U16,
        ScalarKind::I16,
        ScalarKind::U32,
        ScalarKind::I32,
    ])
    .unwrap();

    let mut cursor = Cursor::new(data);
    cursor.combine_pair(&output_widths, &input_kinds, |out, input, cursor| {
        let width = match out {
            ScalarValue::U8(_) => Width::One,
            ScalarValue::U16(_) => Width::Two,
            _ => Width::Four,
        };

        // The selected kind only decides the window's element width;
        // signedness never changes the bits.
        let units = match input.kind().width() {
            1 => {
                let window: &[u8] = cursor.drain_view();
                transcoded_len(Utf8Chars::new(window), width)
            }
            2 => {
                let window: Vec<u16> = cursor.drain_scalars();
                transcoded_len(Utf16Chars::new(&window), width)
            }
            _ => {
                let window: Vec<u32> = cursor.drain_scalars();
                transcoded_len(Utf32Chars::new(&window), width)
            }
        };

        // No window yields more than 4 output units per input byte
        assert!(units <= data.len() * 4);
    });
});
