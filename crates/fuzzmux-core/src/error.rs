use crate::scalar::ScalarKind;

/// Errors rejected at candidate-set construction time.
///
/// These are static configuration mistakes, caught once in
/// [`CandidateSet::new`](crate::CandidateSet::new) before any fuzz
/// input is processed — never at decode time. Runtime contract
/// violations (cursor underflow, multi-byte view elements) are
/// asserts instead; see the crate docs.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CandidateSetError {
    /// A selection axis needs at least one candidate.
    #[error("candidate set is empty")]
    Empty,

    /// One selector byte can address at most 255 candidates.
    #[error("candidate set has {count} entries, limit is 255 (one selector byte)")]
    TooMany { count: usize },

    /// A candidate is wider than the fixed decode slot.
    #[error("candidate {kind:?} is {width} bytes, wider than the 16-byte slot")]
    Oversized { kind: ScalarKind, width: usize },
}
