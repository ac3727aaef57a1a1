use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::error::CipherError;
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::tables::KEY_BITS;
use crate::crypto::utils::{split_half, xor_bits};
use bitvec::prelude::*;
use std::sync::Arc;

/// Generic Feistel network: the key schedule and the round transformation
/// are injected, the network only drives the rounds and the final swap.
pub struct FeistelNetwork {
    num_rounds: usize,
    key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
    transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
}

impl FeistelNetwork {
    pub fn new(
        num_rounds: usize,
        key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
        transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
    ) -> Self {
        Self {
            num_rounds,
            key_expansion,
            transformation,
        }
    }

    /// Derive the round keys from `key` and run the block through the
    /// network. The key must be exactly [`KEY_BITS`] bits; the block only
    /// needs an even length so it splits into equal halves.
    pub fn encrypt(&self, block: &BitSlice, key: &BitSlice) -> Result<BitVec, CipherError> {
        if key.len() != KEY_BITS {
            return Err(CipherError::KeyLength {
                expected: KEY_BITS,
                actual: key.len(),
            });
        }
        let round_keys = self.key_expansion.generate_round_keys(key);
        self.encrypt_with_round_keys(block, &round_keys)
    }

    pub fn encrypt_with_round_keys(
        &self,
        block: &BitSlice,
        round_keys: &[BitVec],
    ) -> Result<BitVec, CipherError> {
        if block.len() % 2 != 0 {
            return Err(CipherError::OddBlockLength(block.len()));
        }

        let (left, right) = split_half(block);
        let mut left = left.to_bitvec();
        let mut right = right.to_bitvec();

        for index in 0..self.num_rounds {
            let f_out = self.transformation.transform(&right, &round_keys[index]);
            // Zip-shortest XOR: with a wider-than-64-bit input block the
            // right half shrinks to the F-output width, as in the reference.
            let new_right = xor_bits(&left, &f_out);
            left = right;
            right = new_right;
        }

        // Final swap: halves are emitted in right ++ left order.
        let mut cipher_block = BitVec::with_capacity(right.len() + left.len());
        cipher_block.extend(right.iter().by_vals());
        cipher_block.extend(left.iter().by_vals());
        Ok(cipher_block)
    }
}
