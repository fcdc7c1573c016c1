//! Ordered, validated sets of candidate scalar kinds.

use crate::error::CandidateSetError;
use crate::scalar::ScalarKind;
use crate::slot::SLOT_WIDTH;

/// Upper bound on candidates per axis: one selector byte must be able
/// to address every index.
pub const MAX_CANDIDATES: usize = 255;

/// An ordered, fixed sequence of candidate kinds for one selection
/// axis.
///
/// Order matters: the selector byte maps to an index into this
/// sequence, so reordering a set changes what every corpus entry
/// decodes to. Validation happens here, once — decode paths assume a
/// well-formed set and perform no per-call checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateSet {
    kinds: Vec<ScalarKind>,
}

impl CandidateSet {
    /// Build a candidate set, validating the static preconditions.
    ///
    /// # Errors
    ///
    /// - [`CandidateSetError::Empty`] for a zero-length set.
    /// - [`CandidateSetError::TooMany`] for more than 255 entries.
    /// - [`CandidateSetError::Oversized`] if any kind is wider than
    ///   [`SLOT_WIDTH`].
    pub fn new(kinds: impl Into<Vec<ScalarKind>>) -> Result<Self, CandidateSetError> {
        let kinds = kinds.into();

        if kinds.is_empty() {
            return Err(CandidateSetError::Empty);
        }
        if kinds.len() > MAX_CANDIDATES {
            return Err(CandidateSetError::TooMany { count: kinds.len() });
        }
        if let Some(&kind) = kinds.iter().find(|kind| kind.width() > SLOT_WIDTH) {
            return Err(CandidateSetError::Oversized {
                kind,
                width: kind.width(),
            });
        }

        Ok(Self { kinds })
    }

    /// Number of candidates (1..=255).
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Always false — an empty set cannot be constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// The kind at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`. Selection outcomes are always in
    /// range.
    #[must_use]
    pub fn kind_at(&self, index: usize) -> ScalarKind {
        self.kinds[index]
    }

    /// The candidates in selection order.
    #[must_use]
    pub fn kinds(&self) -> &[ScalarKind] {
        &self.kinds
    }
}
