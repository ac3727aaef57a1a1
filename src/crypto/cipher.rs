use crate::crypto::cipher_traits::{CipherAlgorithm, SymmetricCipher};
use crate::crypto::error::CipherError;
use crate::crypto::feistel_network::FeistelNetwork;
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::key_schedule::Feistel64KeyExpansion;
use crate::crypto::round_function::Feistel64Transformation;
use crate::crypto::tables::{KEY_BITS, NUM_ROUNDS};
use bitvec::prelude::*;
use std::sync::Arc;

/// The keyed cipher: a [`FeistelNetwork`] wired with the rotating-split key
/// schedule and the expand/xor/permute round function, holding the
/// materialized round keys.
pub struct Feistel64Cipher {
    network: FeistelNetwork,
    round_keys: Vec<BitVec>,
}

impl std::fmt::Debug for Feistel64Cipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Feistel64Cipher")
            .field("round_keys", &self.round_keys)
            .finish_non_exhaustive()
    }
}

impl Feistel64Cipher {
    /// Build the cipher and derive all round keys from a 64-bit master key.
    pub fn new(master_key: &BitSlice) -> Result<Self, CipherError> {
        let network = FeistelNetwork::new(
            NUM_ROUNDS,
            Arc::new(Feistel64KeyExpansion),
            Arc::new(Feistel64Transformation),
        );
        let mut cipher = Feistel64Cipher {
            network,
            round_keys: Vec::new(),
        };
        cipher.set_key(master_key)?;
        Ok(cipher)
    }

    /// The derived subkeys, one per round.
    pub fn round_keys(&self) -> &[BitVec] {
        &self.round_keys
    }
}

impl CipherAlgorithm for Feistel64Cipher {
    fn encrypt(&self, block: &BitSlice) -> Result<BitVec, CipherError> {
        self.network.encrypt_with_round_keys(block, &self.round_keys)
    }
}

impl SymmetricCipher for Feistel64Cipher {
    fn set_key(&mut self, key: &BitSlice) -> Result<(), CipherError> {
        if key.len() != KEY_BITS {
            return Err(CipherError::KeyLength {
                expected: KEY_BITS,
                actual: key.len(),
            });
        }
        self.round_keys = Feistel64KeyExpansion.generate_round_keys(key);
        Ok(())
    }
}
