//! Combinator: one or two selection rounds wired to a caller
//! callback.
//!
//! This is the top of the decode pipeline. Each axis is one
//! select-then-decode round; the two-axis form nests round B inside
//! round A's continuation, so B runs only when A actually selected
//! something. Plain function composition — the nesting is not encoded
//! in the type system.

use crate::candidates::CandidateSet;
use crate::cursor::Cursor;
use crate::scalar::ScalarValue;
use crate::select::{Selection, select_index};
use crate::slot::{SLOT_WIDTH, decode_slot};

impl<'a> Cursor<'a> {
    /// One selection round: pick a kind from `candidates`, decode one
    /// slot, and hand the value plus the advanced cursor to `f`.
    ///
    /// Byte accounting, exactly:
    ///
    /// - `remaining < 1 + SLOT_WIDTH`: the round is skipped. Zero
    ///   bytes are consumed and `f` is not invoked. (A round needs
    ///   one selector byte plus one full slot up front.)
    /// - selection miss: exactly 1 byte consumed, `f` not invoked.
    /// - selection hit: exactly `1 + SLOT_WIDTH` bytes consumed
    ///   before `f` runs, regardless of the selected kind's width.
    pub fn combine<F>(&mut self, candidates: &CandidateSet, f: F)
    where
        F: FnOnce(ScalarValue, &mut Cursor<'a>),
    {
        if self.remaining() < 1 + SLOT_WIDTH {
            return;
        }

        match select_index(self, candidates.len()) {
            Selection::Miss => {}
            Selection::Selected(index) => {
                let value = decode_slot(self, candidates.kind_at(index));
                f(value, self);
            }
        }
    }

    /// Two independent selection rounds; `f` runs only when both
    /// axes selected.
    ///
    /// Round A follows the [`combine`](Self::combine) protocol; round
    /// B runs inside A's continuation, so a miss (or size skip) on A
    /// means B's bytes are never touched. A hit on A followed by a
    /// miss on B consumes A's `1 + SLOT_WIDTH` bytes plus B's single
    /// selector byte.
    pub fn combine_pair<F>(&mut self, first: &CandidateSet, second: &CandidateSet, f: F)
    where
        F: FnOnce(ScalarValue, ScalarValue, &mut Cursor<'a>),
    {
        self.combine(first, |a, cursor| {
            cursor.combine(second, |b, cursor| f(a, b, cursor));
        });
    }
}
