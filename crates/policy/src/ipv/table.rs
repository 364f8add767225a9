//! The fixed insertion/promotion vector.
//!
//! An IPV collapses a replacement policy's insertion and promotion decisions
//! into one lookup table over recency positions: indices `0..IPV_WAYS` give
//! the promotion target for a line currently at that position, and the final
//! index gives the position assigned to a newly inserted line. The values
//! here come from an offline workload-optimization study, not an arithmetic
//! rule, which is why some promotions jump far toward MRU (position 10 moves
//! to 5) while others barely move (position 0 stays put).

/// Number of recency positions the vector covers (the associativity it is
/// built for). The vector is a fixed constant, not derived from
/// configuration; other associativities use the fallback mode.
pub const IPV_WAYS: usize = 16;

/// The insertion/promotion vector.
///
/// Must be kept byte-for-byte: altering any entry silently changes eviction
/// behavior. The last entry (`IPV[IPV_WAYS]` = 13) is the insertion position
/// for new lines.
pub const IPV: [u8; IPV_WAYS + 1] = [0, 0, 1, 0, 3, 0, 1, 2, 1, 0, 5, 1, 0, 0, 1, 11, 13];

// Every entry must be a valid recency position, so promotion can never
// produce a depth outside [0, IPV_WAYS - 1].
const _: () = {
    let mut i = 0;
    while i < IPV.len() {
        assert!((IPV[i] as usize) < IPV_WAYS);
        i += 1;
    }
};
