use feistel64::crypto::key_expansion::KeyExpansion;
use feistel64::crypto::key_schedule::Feistel64KeyExpansion;
use feistel64::crypto::tables::{NUM_ROUNDS, SHIFT_SCHEDULE};
use feistel64::crypto::utils::{bits_to_hex, text_to_bits};

#[test]
fn test_round_key_count_and_width() {
    let key = text_to_bits("mykey123");
    let round_keys = Feistel64KeyExpansion.generate_round_keys(&key);
    assert_eq!(round_keys.len(), NUM_ROUNDS);
    for rk in &round_keys {
        assert_eq!(rk.len(), key.len());
    }
}

#[test]
fn test_known_round_keys() {
    // Reference values for the key "mykey123".
    let key = text_to_bits("mykey123");
    let round_keys = Feistel64KeyExpansion.generate_round_keys(&key);
    assert_eq!(bits_to_hex(&round_keys[0]).unwrap(), "daf2d6caf2626466");
    assert_eq!(bits_to_hex(&round_keys[1]).unwrap(), "b5e5ad95e4c4c8cd");
    assert_eq!(bits_to_hex(&round_keys[9]).unwrap(), "d6cadaf26466f262");
}

#[test]
fn test_rotations_are_cumulative() {
    // Round n+1's halves are round n's halves rotated again, not fresh
    // rotations of the master key.
    let key = text_to_bits("mykey123");
    let round_keys = Feistel64KeyExpansion.generate_round_keys(&key);

    for round in 0..NUM_ROUNDS - 1 {
        let mut left = round_keys[round][..32].to_bitvec();
        let mut right = round_keys[round][32..].to_bitvec();
        left.rotate_left(SHIFT_SCHEDULE[round + 1]);
        right.rotate_left(SHIFT_SCHEDULE[round + 1]);

        assert_eq!(round_keys[round + 1][..32], left[..]);
        assert_eq!(round_keys[round + 1][32..], right[..]);
    }
}

#[test]
fn test_schedule_is_deterministic() {
    let key = text_to_bits("mykey123");
    let first = Feistel64KeyExpansion.generate_round_keys(&key);
    let second = Feistel64KeyExpansion.generate_round_keys(&key);
    assert_eq!(first, second);
}
