//! Remainder extraction: the four terminal/partial drain modes.
//!
//! Once argument selection is done, the rest of the buffer is free
//! for ad hoc consumption. Each drain consumes from the current
//! offset toward the end and never rewinds; only
//! [`drain_scalars`](Cursor::drain_scalars) and
//! [`drain_half`](Cursor::drain_half) can leave bytes behind.

use zerocopy::{FromBytes, Immutable, KnownLayout};

use crate::cursor::Cursor;
use crate::scalar::Scalar;

impl<'a> Cursor<'a> {
    /// Consume every remaining byte as an owned sequence.
    ///
    /// The cursor is empty afterwards. Calling this on an already
    /// empty cursor is safe and yields an empty vec.
    pub fn drain_rest(&mut self) -> Vec<u8> {
        let rest = self.rest().to_vec();
        self.advance(rest.len());
        rest
    }

    /// Consume as many whole values of `T` as fit in the remainder.
    ///
    /// Produces `remaining / T::WIDTH` values and advances by exactly
    /// that many widths. A trailing partial element
    /// (`remaining % T::WIDTH` bytes) is left unconsumed — this drain
    /// never advances past a partial element.
    pub fn drain_scalars<T: Scalar>(&mut self) -> Vec<T> {
        let count = self.remaining() / T::WIDTH;
        let consumed = count * T::WIDTH;

        let values = self.rest()[..consumed]
            .chunks_exact(T::WIDTH)
            .map(T::decode)
            .collect();
        self.advance(consumed);
        values
    }

    /// Consume the front half of the remainder, rounded down.
    ///
    /// Takes exactly `remaining / 2` bytes; the other
    /// `remaining - remaining / 2` stay available for further drains.
    pub fn drain_half(&mut self) -> Vec<u8> {
        let take = self.remaining() / 2;
        let half = self.rest()[..take].to_vec();
        self.advance(take);
        half
    }

    /// Zero-copy view of the whole remainder as 1-byte elements.
    ///
    /// No bytes are copied; the view borrows the input buffer
    /// directly and the cursor becomes empty. `T` must be exactly one
    /// byte wide (`u8`, `i8`) so the reinterpretation is legal for
    /// any length and alignment.
    ///
    /// # Panics
    ///
    /// Panics if `T::WIDTH != 1`. Use
    /// [`drain_scalars`](Self::drain_scalars) for wider element
    /// types.
    pub fn drain_view<T>(&mut self) -> &'a [T]
    where
        T: Scalar + FromBytes + Immutable + KnownLayout,
    {
        assert!(T::WIDTH == 1, "drain_view requires 1-byte elements");

        let rest = self.rest();
        self.advance(rest.len());
        // A 1-byte FromBytes element reinterprets any byte slice.
        <[T]>::ref_from_bytes(rest).expect("invariant: element width is 1")
    }
}
