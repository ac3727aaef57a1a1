use bitvec::prelude::*;
use feistel64::crypto::encryption_transformation::EncryptionTransformation;
use feistel64::crypto::error::CipherError;
use feistel64::crypto::feistel_network::FeistelNetwork;
use feistel64::crypto::key_expansion::KeyExpansion;
use feistel64::crypto::key_schedule::Feistel64KeyExpansion;
use feistel64::crypto::round_function::Feistel64Transformation;
use feistel64::crypto::utils::{bits_to_hex, text_to_bits};
use std::sync::Arc;

struct MockKeyExpansion;
impl KeyExpansion for MockKeyExpansion {
    fn generate_round_keys(&self, _key: &BitSlice) -> Vec<BitVec> {
        vec![BitVec::repeat(false, 64); 10]
    }
}

struct ZeroTransformation;
impl EncryptionTransformation for ZeroTransformation {
    fn transform(&self, half_block: &BitSlice, _round_key: &BitSlice) -> BitVec {
        BitVec::repeat(false, half_block.len())
    }
}

fn network_under_test() -> FeistelNetwork {
    FeistelNetwork::new(
        10,
        Arc::new(Feistel64KeyExpansion),
        Arc::new(Feistel64Transformation),
    )
}

#[test]
fn test_encrypt_derives_keys_and_matches_golden_vector() {
    let network = network_under_test();
    let block = text_to_bits("ABCDEFGH");
    let key = text_to_bits("mykey123");

    let cipher_block = network.encrypt(&block, &key).unwrap();
    assert_eq!(bits_to_hex(&cipher_block).unwrap(), "894b25e512440e44");
}

#[test]
fn test_encrypt_rejects_short_key() {
    let network = network_under_test();
    let block = text_to_bits("ABCDEFGH");
    let key = text_to_bits("mykey");

    assert_eq!(
        network.encrypt(&block, &key).unwrap_err(),
        CipherError::KeyLength {
            expected: 64,
            actual: 40
        }
    );
}

#[test]
fn test_final_swap_with_zero_round_function() {
    // With an F-function that always returns 0, every round only swaps the
    // halves; after an even number of rounds the block is back in place and
    // the output is exactly the final right ++ left swap.
    let network = FeistelNetwork::new(
        10,
        Arc::new(MockKeyExpansion),
        Arc::new(ZeroTransformation),
    );

    let block = text_to_bits("ABCDEFGH");
    let key = text_to_bits("mykey123");
    let out = network.encrypt(&block, &key).unwrap();

    let mut swapped = block[32..].to_bitvec();
    swapped.extend(block[..32].iter().by_vals());
    assert_eq!(out, swapped);
}

#[test]
fn test_wide_block_narrows_through_truncating_xor() {
    // A 128-bit block (the always-padded 8-char case) is accepted and the
    // zip-shortest XORs shrink the output to a single 64-bit block.
    let network = network_under_test();
    let block = text_to_bits("ABCDEFGHABCDEFGH");
    let key = text_to_bits("mykey123");

    let out = network.encrypt(&block, &key).unwrap();
    assert_eq!(out.len(), 64);
}
