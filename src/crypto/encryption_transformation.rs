use bitvec::prelude::*;

pub trait EncryptionTransformation {
    fn transform(&self, half_block: &BitSlice, round_key: &BitSlice) -> BitVec;
}
