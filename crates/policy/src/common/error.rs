//! Error definitions for the replacement policy.
//!
//! Every failure the policy can report is a deterministic contract violation,
//! caught either at construction time or at the `select_victim` call site.
//! There are no transient failure modes: no operation performs I/O, allocates
//! fallibly, or is ever retried.

use thiserror::Error;

/// Errors reported by policy construction and victim selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReplacementError {
    /// The configured associativity does not match the insertion/promotion
    /// vector, and the mismatch discipline is [`Fatal`](crate::MismatchPolicy::Fatal).
    ///
    /// Raised only at construction time. Under the
    /// [`Degrade`](crate::MismatchPolicy::Degrade) discipline the policy is
    /// constructed in fallback mode instead and a warning is logged.
    #[error("associativity {ways} does not match the {expected}-entry insertion/promotion vector")]
    AssociativityMismatch {
        /// Associativity supplied by the enclosing cache configuration.
        ways: usize,
        /// Number of recency positions the vector covers.
        expected: usize,
    },

    /// The configured associativity is zero.
    ///
    /// A set with no lines has no meaningful replacement behavior under
    /// either mismatch discipline, so construction always refuses it.
    #[error("associativity must be at least 1")]
    ZeroWays,

    /// `select_victim` was called with an empty candidate sequence.
    ///
    /// The caller contract requires at least one candidate; the policy never
    /// silently substitutes a sentinel value.
    #[error("victim selection requires a non-empty candidate set")]
    EmptyCandidates,
}
