#![warn(clippy::pedantic)]

//! Shared fixtures for the fuzzmux integration tests and benches.

use fuzzmux_core::SLOT_WIDTH;

/// Build a decode-session buffer: one selector byte, one slot padded
/// to [`SLOT_WIDTH`], then a free-form tail.
#[must_use]
pub fn session_buffer(selector: u8, slot: &[u8], tail: &[u8]) -> Vec<u8> {
    assert!(slot.len() <= SLOT_WIDTH, "slot fixture wider than the slot");

    let mut buf = Vec::with_capacity(1 + SLOT_WIDTH + tail.len());
    buf.push(selector);
    buf.extend_from_slice(slot);
    buf.resize(1 + SLOT_WIDTH, 0);
    buf.extend_from_slice(tail);
    buf
}

/// A deterministic pseudo-random buffer for benches; not a fuzz
/// corpus, just stable bytes with some variety.
#[must_use]
pub fn patterned_buffer(len: usize) -> Vec<u8> {
    let mut state = 0x9E37_79B9u32;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (state >> 24) as u8
        })
        .collect()
}
