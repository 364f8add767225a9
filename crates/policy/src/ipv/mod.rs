//! The IPV replacement engine.
//!
//! Implements victim selection and per-line recency maintenance for
//! set-associative caches. The engine approximates the published
//! stack-based IPV policy with one bounded counter per line:
//! instead of shifting an ordered recency stack, a hit rewrites the line's
//! depth through the vector, and a fill assigns the vector's insertion
//! position. Victim selection picks the deepest candidate with a stable
//! left-to-right tie-break.
//!
//! The operating mode is resolved once at construction. When the configured
//! associativity matches the vector, the vector governs directly; otherwise
//! the configured mismatch discipline decides between refusing construction
//! and degrading to a classic bounded-counter recency approximation.
//!
//! The engine holds no locks: the enclosing controller must serialize
//! operations touching the same set. Operations on different sets (through
//! their own line states) are fully independent.

/// Per-line replacement state (the bounded recency depth).
pub mod state;

/// The fixed insertion/promotion vector.
pub mod table;

use self::state::LineState;
use self::table::{IPV, IPV_WAYS};
use crate::common::error::ReplacementError;
use crate::config::{MismatchPolicy, ReplacementConfig};
use crate::stats::PolicyStats;

/// Operating mode, resolved once at construction and fixed for the policy's
/// lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Associativity matches the vector; the IPV governs insertions and
    /// promotions directly.
    Exact,
    /// Bounded-counter recency approximation for a non-matching
    /// associativity: insert at `ways - 1`, promote to MRU.
    Fallback {
        /// Associativity of the governed cache (not the vector's).
        ways: usize,
    },
}

/// IPV replacement policy engine.
///
/// One instance governs any number of sets of the same shape; all per-line
/// state lives in caller-owned [`LineState`] values, so the engine itself
/// carries only the resolved mode and its event counters.
#[derive(Debug, Clone)]
pub struct IpvPolicy {
    mode: Mode,
    stats: PolicyStats,
}

impl IpvPolicy {
    /// Creates a policy for the given configuration, resolving the operating
    /// mode once.
    ///
    /// An associativity of [`IPV_WAYS`] selects exact mode. Any other value
    /// is handled according to `config.on_mismatch`: `Fatal` refuses
    /// construction, `Degrade` logs a warning and continues in fallback
    /// mode with the configured associativity.
    ///
    /// # Errors
    ///
    /// Returns [`ReplacementError::ZeroWays`] when `config.ways` is zero, and
    /// [`ReplacementError::AssociativityMismatch`] when `config.ways` differs
    /// from the vector under the `Fatal` discipline.
    pub fn new(config: &ReplacementConfig) -> Result<Self, ReplacementError> {
        if config.ways == 0 {
            return Err(ReplacementError::ZeroWays);
        }

        let mode = if config.ways == IPV_WAYS {
            Mode::Exact
        } else {
            match config.on_mismatch {
                MismatchPolicy::Fatal => {
                    return Err(ReplacementError::AssociativityMismatch {
                        ways: config.ways,
                        expected: IPV_WAYS,
                    });
                }
                MismatchPolicy::Degrade => {
                    tracing::warn!(
                        ways = config.ways,
                        expected = IPV_WAYS,
                        "associativity does not match the insertion/promotion \
                         vector; using bounded-counter recency fallback"
                    );
                    Mode::Fallback { ways: config.ways }
                }
            }
        };

        Ok(Self {
            mode,
            stats: PolicyStats::default(),
        })
    }

    /// Allocates fresh per-line state.
    ///
    /// Called once per physical line slot by the enclosing controller. The
    /// returned state carries no meaningful recency information until the
    /// first [`insert`](Self::insert).
    #[inline]
    pub fn allocate(&self) -> LineState {
        LineState::default()
    }

    /// Updates a line's state on fill.
    ///
    /// Exact mode assigns the vector's insertion position; fallback mode
    /// inserts at the deepest position (`ways - 1`, saturated to the depth
    /// type) so a new line must prove reuse before it outlives its set.
    pub fn insert(&mut self, line: &mut LineState) {
        line.depth = match self.mode {
            Mode::Exact => IPV[IPV_WAYS],
            Mode::Fallback { ways } => u8::try_from(ways - 1).unwrap_or(u8::MAX),
        };
        self.stats.insertions += 1;
    }

    /// Updates a line's state on hit.
    ///
    /// Exact mode rewrites the depth through the vector, modeling partial
    /// promotions that may stop short of MRU. Fallback mode promotes
    /// directly to MRU.
    ///
    /// A depth at or beyond the vector's range is clamped to the last valid
    /// position before the lookup. That condition is unreachable through this
    /// API and indicates a bug elsewhere, so the clamp is counted in
    /// [`stats`](Self::stats) and logged.
    pub fn promote(&mut self, line: &mut LineState) {
        match self.mode {
            Mode::Exact => {
                let mut pos = usize::from(line.depth);
                if pos >= IPV_WAYS {
                    self.stats.depth_clamps += 1;
                    tracing::warn!(
                        depth = pos,
                        "recency depth out of range; clamping before vector lookup"
                    );
                    pos = IPV_WAYS - 1;
                }
                line.depth = IPV[pos];
            }
            Mode::Fallback { .. } => line.depth = 0,
        }
        self.stats.promotions += 1;
    }

    /// Handles line invalidation.
    ///
    /// Leaves the depth untouched: the value is ignored for invalid lines
    /// and overwritten by the next [`insert`](Self::insert).
    #[inline]
    pub fn invalidate(&self, _line: &mut LineState) {}

    /// Selects a victim among the candidates of one set.
    ///
    /// Scans the candidates once and returns the position (within the
    /// presented sequence) of the first candidate achieving the maximum
    /// depth. The sequence order is caller-defined and carries no
    /// physical-slot meaning, so ties resolve to whichever qualifying line
    /// the caller listed first.
    ///
    /// # Errors
    ///
    /// Returns [`ReplacementError::EmptyCandidates`] when the sequence is
    /// empty; a miss with no candidates is a caller contract violation.
    pub fn select_victim(&mut self, candidates: &[&LineState]) -> Result<usize, ReplacementError> {
        let (first, rest) = candidates
            .split_first()
            .ok_or(ReplacementError::EmptyCandidates)?;

        let mut victim = 0;
        let mut worst = first.depth;
        for (idx, line) in rest.iter().enumerate() {
            if line.depth > worst {
                worst = line.depth;
                victim = idx + 1;
            }
        }

        self.stats.victim_scans += 1;
        Ok(victim)
    }

    /// Returns the event counters accumulated so far.
    #[inline]
    pub const fn stats(&self) -> &PolicyStats {
        &self.stats
    }

    /// Returns `true` when the policy degraded to the bounded-counter
    /// recency fallback at construction.
    #[inline]
    pub const fn is_fallback(&self) -> bool {
        matches!(self.mode, Mode::Fallback { .. })
    }

    /// Returns the associativity the policy was resolved against: the
    /// vector's in exact mode, the configured one in fallback mode.
    #[inline]
    pub const fn ways(&self) -> usize {
        match self.mode {
            Mode::Exact => IPV_WAYS,
            Mode::Fallback { ways } => ways,
        }
    }
}
