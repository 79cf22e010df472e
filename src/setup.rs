//! Layered illustration of multi-point polynomial commitment evaluation.
//! Each module isolates one rung of the ladder, from residue arithmetic up
//! to batched opening proofs and strategy selection.
//! Trusted setup generation.
//!
//! A trusted setup is an ordered sequence of simulated group powers
//! `g^{tau^i} mod p` derived from a secret `tau` that is drawn, used and
//! discarded inside the constructor.  Because the secret is gone, the
//! setup is write-once: it never changes after construction and can be
//! shared freely across threads.  Generation hides behind the
//! [`TrustedSetupProvider`] capability so a ceremony-derived setup can be
//! dropped in without touching any commitment or evaluation logic.

use crate::error::Error;
use crate::field::{mod_pow, Field};
use crate::prng::SeedStream;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Hard ceiling on the number of powers a setup may hold.
///
/// Committing to a polynomial requires one power per coefficient, so this
/// also bounds the degree of commitable polynomials.
pub const MAX_SETUP_SIZE: usize = 32;

/// Fixed generator whose powers the setup is built from.
pub const SETUP_GENERATOR: u64 = 7;

const DIGEST_DOMAIN: &[u8] = b"polycommit:v1:setup_digest";

/// Immutable sequence of simulated powers `g^{tau^i} mod p`.
///
/// The secret `tau` is not retained; only the powers survive.  That is
/// why a commitment cannot be verified algebraically in the simulated
/// scheme and verification is delegated to a pluggable backend instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustedSetup {
    modulus: u64,
    powers: Vec<u64>,
}

impl TrustedSetup {
    /// Derives `size` powers of [`SETUP_GENERATOR`] from the secret and
    /// drops the secret before returning.
    ///
    /// Exponents live in the multiplicative group, so the running power
    /// of `tau` is reduced modulo `p - 1`.
    fn from_secret(field: &Field, tau: u64, size: usize) -> Result<Self, Error> {
        if size > MAX_SETUP_SIZE {
            return Err(Error::SetupTooLarge {
                requested: size,
                ceiling: MAX_SETUP_SIZE,
            });
        }
        let p = field.modulus();
        let group_order = p - 1;
        let mut powers = Vec::with_capacity(size);
        let mut exponent = 1u64;
        for _ in 0..size {
            powers.push(mod_pow(SETUP_GENERATOR, exponent, p));
            exponent = (exponent as u128 * tau as u128 % group_order as u128) as u64;
        }
        Ok(TrustedSetup {
            modulus: p,
            powers,
        })
    }

    /// Returns the number of powers in the setup.
    pub fn size(&self) -> usize {
        self.powers.len()
    }

    /// Returns the modulus the powers were reduced under.
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Returns the full power sequence.
    pub fn powers(&self) -> &[u64] {
        &self.powers
    }

    /// Returns a hex-encoded SHA-256 fingerprint of the setup.
    ///
    /// Two hosts holding the same fingerprint hold the same powers, so
    /// commitments they exchange are comparable.
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(DIGEST_DOMAIN);
        hasher.update(self.modulus.to_be_bytes());
        hasher.update((self.powers.len() as u64).to_be_bytes());
        for &power in &self.powers {
            hasher.update(power.to_be_bytes());
        }
        hex::encode(hasher.finalize())
    }
}

/// Capability for producing trusted setups.
///
/// The simulated in-process generators below stand in for what would be
/// a multi-party ceremony in a production deployment; hosts substitute
/// their own implementation without touching the commitment logic.
pub trait TrustedSetupProvider {
    /// Produces a setup of `size` powers over `field`.
    fn generate(&mut self, field: &Field, size: usize) -> Result<TrustedSetup, Error>;

    /// Human-friendly label for reports and logging.
    fn name(&self) -> &'static str;
}

/// Setup provider drawing the secret from a caller-supplied random
/// number generator.
#[derive(Debug)]
pub struct RandomSetupProvider<R: Rng> {
    rng: R,
}

impl RandomSetupProvider<StdRng> {
    /// Creates a provider seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        RandomSetupProvider {
            rng: StdRng::from_entropy(),
        }
    }
}

impl<R: Rng> RandomSetupProvider<R> {
    /// Creates a provider around an existing generator.
    pub fn new(rng: R) -> Self {
        RandomSetupProvider { rng }
    }
}

impl<R: Rng> TrustedSetupProvider for RandomSetupProvider<R> {
    fn generate(&mut self, field: &Field, size: usize) -> Result<TrustedSetup, Error> {
        // tau = 0 collapses every later power to 1; draw from [1, p).
        let tau = self.rng.gen_range(1..field.modulus());
        TrustedSetup::from_secret(field, tau, size)
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Setup provider deriving the secret deterministically from a seed.
///
/// Reproducibility makes it the right choice for tests and demos; the
/// seed fully determines the secret, so it offers no security.
#[derive(Debug, Clone)]
pub struct DeterministicSetupProvider {
    stream: SeedStream,
}

impl DeterministicSetupProvider {
    /// Creates a provider whose output is fixed by `seed`.
    pub fn from_seed(seed: u64) -> Self {
        DeterministicSetupProvider {
            stream: SeedStream::new(seed),
        }
    }
}

impl TrustedSetupProvider for DeterministicSetupProvider {
    fn generate(&mut self, field: &Field, size: usize) -> Result<TrustedSetup, Error> {
        let tau = loop {
            let candidate = self.stream.next_mod(field.modulus());
            if candidate != 0 {
                break candidate;
            }
        };
        TrustedSetup::from_secret(field, tau, size)
    }

    fn name(&self) -> &'static str {
        "deterministic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::DEFAULT_MODULUS;

    #[test]
    fn test_ceiling_is_enforced() {
        let field = Field::new(DEFAULT_MODULUS);
        let mut provider = DeterministicSetupProvider::from_seed(1);
        let err = provider.generate(&field, MAX_SETUP_SIZE + 1).unwrap_err();
        assert_eq!(
            err,
            Error::SetupTooLarge {
                requested: MAX_SETUP_SIZE + 1,
                ceiling: MAX_SETUP_SIZE
            }
        );
    }

    #[test]
    fn test_first_power_is_the_generator() {
        let field = Field::new(DEFAULT_MODULUS);
        let mut provider = DeterministicSetupProvider::from_seed(9);
        let setup = provider.generate(&field, 4).unwrap();
        assert_eq!(setup.powers()[0], SETUP_GENERATOR);
        assert_eq!(setup.size(), 4);
    }

    #[test]
    fn test_deterministic_provider_reproduces() {
        let field = Field::new(DEFAULT_MODULUS);
        let a = DeterministicSetupProvider::from_seed(42)
            .generate(&field, 8)
            .unwrap();
        let b = DeterministicSetupProvider::from_seed(42)
            .generate(&field, 8)
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(a.digest(), b.digest());
    }

    #[test]
    fn test_distinct_seeds_give_distinct_digests() {
        let field = Field::new(DEFAULT_MODULUS);
        let a = DeterministicSetupProvider::from_seed(1)
            .generate(&field, 8)
            .unwrap();
        let b = DeterministicSetupProvider::from_seed(2)
            .generate(&field, 8)
            .unwrap();
        assert_ne!(a.digest(), b.digest());
    }

    #[test]
    fn test_random_provider_respects_size() {
        let field = Field::new(DEFAULT_MODULUS);
        let mut provider = RandomSetupProvider::from_entropy();
        let setup = provider.generate(&field, 16).unwrap();
        assert_eq!(setup.size(), 16);
        assert!(setup.powers().iter().all(|&g| g < field.modulus()));
    }
}
