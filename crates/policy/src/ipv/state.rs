//! Per-line replacement state.

/// Replacement state for one cache line: a single bounded recency depth.
///
/// Depth 0 is the most-recently-used position; the maximum depth is the most
/// eviction-eligible. The value is owned by whatever structure the enclosing
/// controller uses to represent a line and moves with that storage: plain
/// value semantics, no heap allocation.
///
/// A freshly allocated state carries no meaningful recency information; the
/// depth becomes meaningful on the first [`insert`](crate::IpvPolicy::insert)
/// and is only ever mutated by the policy's operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineState {
    /// Recency depth; larger means more likely to be evicted.
    pub(crate) depth: u8,
}

impl LineState {
    /// Returns the current recency depth.
    #[inline]
    pub const fn depth(&self) -> u8 {
        self.depth
    }
}
