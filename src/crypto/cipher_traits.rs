use crate::crypto::error::CipherError;
use bitvec::prelude::*;

pub trait CipherAlgorithm {
    fn encrypt(&self, block: &BitSlice) -> Result<BitVec, CipherError>;
}

pub trait SymmetricCipher: CipherAlgorithm {
    fn set_key(&mut self, key: &BitSlice) -> Result<(), CipherError>;
}
