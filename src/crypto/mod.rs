pub mod cipher;
pub mod cipher_traits;
pub mod encryption_transformation;
pub mod error;
pub mod feistel_network;
pub mod key_expansion;
pub mod key_schedule;
pub mod round_function;
pub mod tables;
pub mod utils;

use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::key_expansion::KeyExpansion;
use bitvec::prelude::*;
use std::sync::Arc;

impl KeyExpansion for Arc<dyn KeyExpansion + Send + Sync> {
    fn generate_round_keys(&self, key: &BitSlice) -> Vec<BitVec> {
        (**self).generate_round_keys(key)
    }
}

impl EncryptionTransformation for Arc<dyn EncryptionTransformation + Send + Sync> {
    fn transform(&self, half_block: &BitSlice, round_key: &BitSlice) -> BitVec {
        (**self).transform(half_block, round_key)
    }
}
