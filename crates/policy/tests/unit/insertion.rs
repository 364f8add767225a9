//! Insertion, Allocation, and Invalidation Tests.
//!
//! Verifies the state a line carries when it is filled, the blank state
//! `allocate` hands out, and the deliberate no-op on invalidation.

use lru_ipv::{IpvPolicy, MismatchPolicy, ReplacementConfig};
use rstest::rstest;

/// Builds an exact-mode policy (sixteen ways, fatal discipline).
fn exact() -> IpvPolicy {
    IpvPolicy::new(&ReplacementConfig::default()).unwrap()
}

/// Builds a degraded policy with the given associativity.
fn fallback(ways: usize) -> IpvPolicy {
    IpvPolicy::new(&ReplacementConfig {
        ways,
        on_mismatch: MismatchPolicy::Degrade,
    })
    .unwrap()
}

// ══════════════════════════════════════════════════════════
// 1. Allocation
// ══════════════════════════════════════════════════════════

/// Freshly allocated state is zeroed and carries no side effects.
#[test]
fn allocate_returns_blank_state() {
    let policy = exact();
    let line = policy.allocate();
    assert_eq!(line.depth(), 0);
}

// ══════════════════════════════════════════════════════════
// 2. Insertion depth
// ══════════════════════════════════════════════════════════

/// Exact mode inserts at the vector's insertion position.
#[test]
fn exact_insert_lands_at_vector_position() {
    let mut policy = exact();
    let mut line = policy.allocate();
    policy.insert(&mut line);
    assert_eq!(line.depth(), 13);
}

/// Fallback mode inserts at the deepest position for the configured
/// associativity, so a new line must prove reuse.
#[rstest]
#[case(2, 1)]
#[case(4, 3)]
#[case(8, 7)]
fn fallback_insert_lands_at_deepest_position(#[case] ways: usize, #[case] expected: u8) {
    let mut policy = fallback(ways);
    let mut line = policy.allocate();
    policy.insert(&mut line);
    assert_eq!(line.depth(), expected);
}

/// Re-filling a line always re-assigns the insertion depth, regardless of
/// what the line did before.
#[test]
fn reinsert_overwrites_promoted_depth() {
    let mut policy = exact();
    let mut line = policy.allocate();

    policy.insert(&mut line);
    policy.promote(&mut line);
    assert_eq!(line.depth(), 0);

    policy.insert(&mut line);
    assert_eq!(line.depth(), 13);
}

// ══════════════════════════════════════════════════════════
// 3. Invalidation
// ══════════════════════════════════════════════════════════

/// Invalidation leaves the depth untouched; the stale value is overwritten
/// by the next insertion.
#[test]
fn invalidate_leaves_depth_stale_until_next_insert() {
    let mut policy = exact();
    let mut line = policy.allocate();

    policy.insert(&mut line);
    policy.invalidate(&mut line);
    assert_eq!(line.depth(), 13, "invalidation must not touch the depth");

    policy.insert(&mut line);
    assert_eq!(line.depth(), 13);
}
