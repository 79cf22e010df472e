//! Layered illustration of multi-point polynomial commitment evaluation.
//! Each module isolates one rung of the ladder, from residue arithmetic up
//! to batched opening proofs and strategy selection.
//! Deterministic byte stream for reproducible setup derivation.
//!
//! This module exposes a compact deterministic stream generator backed by
//! domain-separated BLAKE2b-256 expansions.  It exists so that tests and
//! demonstrations can derive a trusted-setup secret from a seed and get
//! the same setup every run; it makes no secrecy claim and is not a
//! substitute for the operating-system entropy the random provider uses.

use blake2::digest::{consts::U32, Digest};

type Blake2b256 = blake2::Blake2b<U32>;

const STREAM_DOMAIN: &[u8] = b"polycommit:v1:seed_stream";

/// A deterministic stream generator derived from BLAKE2b-256.
///
/// Every output chunk is a keyed hash of the seed and an invocation
/// counter, so the stream is reproducible from the seed alone.
#[derive(Debug, Clone)]
pub(crate) struct SeedStream {
    seed: [u8; 32],
    counter: u64,
    buffer: [u8; 32],
    offset: usize,
}

impl SeedStream {
    /// Creates a stream seeded with `seed`.
    pub(crate) fn new(seed: u64) -> Self {
        let mut hasher = Blake2b256::new();
        hasher.update(STREAM_DOMAIN);
        hasher.update(seed.to_be_bytes());
        let mut base = [0u8; 32];
        base.copy_from_slice(&hasher.finalize());
        Self {
            seed: base,
            counter: 0,
            buffer: [0u8; 32],
            offset: 32,
        }
    }

    fn refill(&mut self) {
        let mut hasher = Blake2b256::new();
        hasher.update(STREAM_DOMAIN);
        hasher.update(self.seed);
        hasher.update(self.counter.to_be_bytes());
        self.buffer.copy_from_slice(&hasher.finalize());
        self.counter = self.counter.wrapping_add(1);
        self.offset = 0;
    }

    /// Advances the stream and returns the next 64-bit word.
    pub(crate) fn next_u64(&mut self) -> u64 {
        if self.offset >= self.buffer.len() {
            self.refill();
        }
        let mut chunk = [0u8; 8];
        chunk.copy_from_slice(&self.buffer[self.offset..self.offset + 8]);
        self.offset += 8;
        u64::from_be_bytes(chunk)
    }

    /// Returns the next word reduced modulo `modulus`.
    ///
    /// # Panics
    ///
    /// Panics if `modulus` is zero.
    pub(crate) fn next_mod(&mut self, modulus: u64) -> u64 {
        assert!(modulus != 0, "modulus must be non-zero");
        self.next_u64() % modulus
    }
}
