//! Policy event counters.
//!
//! This module tracks the replacement policy's observable events. It provides:
//! 1. **Operation counts:** Insertions, promotions, and victim scans.
//! 2. **Clamp observability:** A count of depth clamps, which stays zero
//!    under every legal call sequence and makes an internal invariant breach
//!    visible in testing.

/// Event counters for one policy instance.
///
/// Counters accumulate for the lifetime of the policy; read them through
/// [`IpvPolicy::stats`](crate::IpvPolicy::stats).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PolicyStats {
    /// Number of line insertions (fills) processed.
    pub insertions: u64,
    /// Number of hit promotions processed.
    pub promotions: u64,
    /// Number of victim-selection scans performed.
    pub victim_scans: u64,
    /// Number of times a promotion observed an out-of-range depth and clamped
    /// it before the vector lookup. Nonzero values indicate a bug elsewhere.
    pub depth_clamps: u64,
}
