use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::tables::{NUM_ROUNDS, SHIFT_SCHEDULE};
use crate::crypto::utils::split_half;
use bitvec::prelude::*;

/// Rotating-split key schedule: both key halves are rotated left per round
/// and concatenated into that round's subkey.
pub struct Feistel64KeyExpansion;

impl KeyExpansion for Feistel64KeyExpansion {
    fn generate_round_keys(&self, key: &BitSlice) -> Vec<BitVec> {
        let (left, right) = split_half(key);
        let mut left = left.to_bitvec();
        let mut right = right.to_bitvec();

        // Rotations are cumulative: each round shifts the halves left as
        // already rotated by the previous rounds, not the original key.
        let mut round_keys = Vec::with_capacity(NUM_ROUNDS);
        for &shift in SHIFT_SCHEDULE.iter().take(NUM_ROUNDS) {
            left.rotate_left(shift);
            right.rotate_left(shift);

            let mut subkey = BitVec::with_capacity(key.len());
            subkey.extend(left.iter().by_vals());
            subkey.extend(right.iter().by_vals());
            round_keys.push(subkey);
        }

        round_keys
    }
}
