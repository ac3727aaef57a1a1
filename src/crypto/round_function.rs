use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::tables::{EXPANSION_TABLE, PERMUTATION_TABLE};
use crate::crypto::utils::{permute_bits, xor_bits};
use bitvec::prelude::*;

/// The keyed F-function applied to the right half each round.
pub struct Feistel64Transformation;

impl EncryptionTransformation for Feistel64Transformation {
    fn transform(&self, half_block: &BitSlice, round_key: &BitSlice) -> BitVec {
        // 1. Expansion (out-of-range table entries read as 0)
        let expanded = permute_bits(half_block, &EXPANSION_TABLE);

        // 2. Key mixing. The subkey is 64 bits but the expansion is 32; the
        // zip-shortest XOR consumes only the first 32 key bits. This
        // truncation is part of the cipher definition and must stay.
        let mixed = xor_bits(&expanded, round_key);

        // 3. P-permutation
        permute_bits(&mixed, &PERMUTATION_TABLE)
    }
}
