/// Rounds of the Feistel network.
pub const NUM_ROUNDS: usize = 10;

/// The engine works with 64-bit keys (8 single-byte characters).
pub const KEY_BITS: usize = 64;

/// Per-round left-rotation amounts for both key halves. The schedule carries
/// 16 entries; only the first [`NUM_ROUNDS`] are consumed.
pub const SHIFT_SCHEDULE: [usize; 16] = [
    1, 1, 2, 2, 2, 2, 2, 2,
    1, 2, 2, 2, 2, 2, 2, 1,
];

/// Expansion of the right half before key mixing. 1-based indices into the
/// half-block; repeats duplicate source bits.
pub const EXPANSION_TABLE: [usize; 32] = [
    1, 2, 3, 4, 5, 6, 5, 6,
    7, 8, 9, 8, 9, 10, 11, 12,
    13, 14, 13, 14, 15, 16, 17, 16,
    17, 18, 19, 20, 21, 22, 21, 22,
];

/// Final bit reordering of the mixed half. 1-based, a full permutation of
/// 1..=32 with no repeats. Not an involution.
pub const PERMUTATION_TABLE: [usize; 32] = [
    4, 1, 3, 5, 7, 2, 6, 8,
    12, 10, 9, 11, 16, 14, 13, 15,
    20, 18, 17, 19, 24, 22, 21, 23,
    28, 26, 25, 27, 32, 30, 29, 31,
];
