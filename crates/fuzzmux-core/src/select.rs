//! Selector-byte decoding: one byte picks a candidate index, or
//! misses.

use crate::cursor::Cursor;

/// Outcome of one selection round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// The selector byte mapped to a valid candidate index.
    Selected(usize),
    /// The masked byte fell outside `0..candidates`. The selector byte
    /// is consumed, but nothing is decoded and no callback runs for
    /// this round.
    Miss,
}

/// Consume one selector byte and map it to an index in
/// `0..candidates`.
///
/// The byte is masked with `next_power_of_two(candidates + 1) - 1`,
/// the smallest all-ones mask covering `candidates + 1` values. Using
/// `candidates + 1` (not `candidates`) means the masked space is never
/// perfectly tight, so [`Selection::Miss`] stays reachable and its
/// probability varies with the set size. That skew is load-bearing:
/// existing corpus entries replay bit-for-bit only if this formula
/// never changes. Do not make the mapping uniform.
///
/// | candidates | mask | miss values (mod mask+1) |
/// |------------|------|--------------------------|
/// | 1          | 1    | 1                        |
/// | 3          | 3    | 3                        |
/// | 4          | 7    | 4, 5, 6                  |
/// | 11         | 15   | 11..=15                  |
///
/// # Panics
///
/// Panics if the cursor is empty; the combinator's size guard runs
/// first. `candidates` is in `1..=255` for any constructed
/// [`CandidateSet`](crate::CandidateSet).
pub fn select_index(cursor: &mut Cursor<'_>, candidates: usize) -> Selection {
    debug_assert!((1..=255).contains(&candidates));

    let mask = (candidates + 1).next_power_of_two() - 1;
    let index = usize::from(cursor.consume_byte()) & mask;

    if index < candidates {
        Selection::Selected(index)
    } else {
        Selection::Miss
    }
}
