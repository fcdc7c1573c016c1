#![warn(clippy::pedantic)]

//! Deterministic combinatorial decoder for fuzz input buffers.
//!
//! A fuzz engine hands us one opaque byte buffer per run. This crate
//! turns that buffer into strongly-typed scalar values, selected from
//! closed candidate sets, so a single corpus entry can exercise a
//! generic function across many type instantiations without one fuzz
//! entry point per combination.
//!
//! The consumption protocol is small and exact:
//!
//! 1. One selector byte picks a candidate kind (or misses).
//! 2. A fixed 16-byte slot materializes the value by raw bit copy.
//! 3. The remainder of the buffer is drained ad hoc by the caller.
//!
//! Every step advances a monotonic [`Cursor`]; byte accounting is
//! bit-for-bit stable so existing corpus entries keep their meaning
//! across runs.

pub mod candidates;
pub mod cursor;
pub mod error;
pub mod scalar;
pub mod select;
pub mod slot;

mod combine;
mod remainder;

pub use candidates::{CandidateSet, MAX_CANDIDATES};
pub use cursor::Cursor;
pub use error::CandidateSetError;
pub use scalar::{Scalar, ScalarKind, ScalarValue};
pub use select::{Selection, select_index};
pub use slot::{SLOT_WIDTH, decode_slot};
