//! A 10-round Feistel block cipher over 64-bit blocks, with custom
//! expansion/permutation tables and a rotating-split key schedule.
//!
//! Bit sequences (`bitvec::BitVec`) are the universal currency: the codec in
//! [`crypto::utils`] turns text into bits, the engine in
//! [`crypto::feistel_network`] transforms them, and the codec renders the
//! result back as text or hex. Encrypt-only by design.

pub mod crypto;
