use thiserror::Error;

/// Errors surfaced by the codec and the cipher engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// A bit sequence handed to the codec is not divisible by the grouping
    /// size (8 for text, 4 for hex).
    #[error("bit sequence of {length} bits is not a multiple of {group}")]
    MisalignedBits { length: usize, group: usize },

    /// The engine requires an exactly 64-bit key.
    #[error("key must be exactly {expected} bits, got {actual}")]
    KeyLength { expected: usize, actual: usize },

    /// A block must split into two equal halves.
    #[error("block of {0} bits cannot be split into equal halves")]
    OddBlockLength(usize),
}
