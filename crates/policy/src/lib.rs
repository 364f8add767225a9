//! Bounded-counter LRU-IPV cache replacement policy library.
//!
//! This crate implements an Insertion/Promotion Vector (IPV) replacement policy
//! for set-associative caches with the following:
//! 1. **Vector:** The fixed 16-way insertion/promotion vector and its closure guarantee.
//! 2. **Per-line state:** A single bounded recency depth per cache line (0 = MRU).
//! 3. **Engine:** Allocation, insertion, promotion, invalidation, and victim selection.
//! 4. **Configuration:** Associativity and mismatch-discipline selection, deserializable from JSON.
//! 5. **Statistics:** Per-policy event counters, including clamp observability.
//!
//! The policy approximates the full stack-shift IPV algorithm with one integer per
//! line: every operation is O(1) except victim selection, which is a single O(ways)
//! scan. The enclosing cache controller owns line storage and serializes accesses
//! to each set; this crate holds no locks and no cross-line shared state.
//!
//! # Examples
//!
//! ```
//! use lru_ipv::{IpvPolicy, ReplacementConfig};
//!
//! let mut policy = IpvPolicy::new(&ReplacementConfig::default())?;
//!
//! let mut line = policy.allocate();
//! policy.insert(&mut line);
//! assert_eq!(line.depth(), 13);
//!
//! policy.promote(&mut line);
//! assert_eq!(line.depth(), 0);
//! # Ok::<(), lru_ipv::ReplacementError>(())
//! ```

/// Common types shared across the policy (error taxonomy).
pub mod common;
/// Policy configuration (associativity, mismatch discipline, JSON deserialization).
pub mod config;
/// The IPV replacement engine, per-line state, and the fixed vector.
pub mod ipv;
/// Policy event counters.
pub mod stats;

/// Error type returned by fallible policy operations.
pub use crate::common::error::ReplacementError;
/// Root configuration type; use `ReplacementConfig::default()` or deserialize from JSON.
pub use crate::config::{MismatchPolicy, ReplacementConfig};
/// Main policy type; construct with `IpvPolicy::new`.
pub use crate::ipv::IpvPolicy;
/// Per-line replacement state; embed one in each cache line's storage.
pub use crate::ipv::state::LineState;
/// Event counters; read through `IpvPolicy::stats`.
pub use crate::stats::PolicyStats;
