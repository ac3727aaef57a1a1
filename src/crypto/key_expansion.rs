use bitvec::prelude::*;

pub trait KeyExpansion {
    fn generate_round_keys(&self, key: &BitSlice) -> Vec<BitVec>;
}
