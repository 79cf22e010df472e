//! Layered illustration of multi-point polynomial commitment evaluation.
//! Each module isolates one rung of the ladder, from residue arithmetic up
//! to batched opening proofs and strategy selection.
//! Simulated polynomial commitments and single-point opening proofs.
//!
//! A commitment is the linear combination of a polynomial's coefficients
//! against the trusted-setup powers, reduced into the field.  Opening at
//! a point commits to the quotient `(P(x) - y) / (x - x0)`, computed by
//! real synthetic division, so an off-polynomial claim surfaces as a
//! non-zero remainder instead of a silently wrong proof.  Deciding a
//! proof is delegated to the [`PairingVerifier`] backend the scheme was
//! constructed with.

use crate::error::Error;
use crate::field::Field;
use crate::polynomial::Polynomial;
use crate::setup::TrustedSetup;
use crate::verify::{PairingVerifier, StrictVerifier};
use serde::{Deserialize, Serialize};

/// Commitment to a polynomial: a single field element.
///
/// Commitments are derived values; they are produced by
/// [`CommitmentScheme::commit`] and never constructed independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commitment(u64);

impl Commitment {
    pub(crate) fn from_raw(value: u64) -> Self {
        Commitment(value)
    }

    /// Returns the committed field element.
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Proof that a committed polynomial takes the value `y` at a point `x`:
/// a commitment to the quotient polynomial `(P(x) - y) / (x - x0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SinglePointProof {
    /// Commitment to the quotient polynomial.
    pub quotient: Commitment,
}

/// Commitment scheme instance: a field, the setup it committed to, and
/// the verification backend proofs are decided with.
///
/// Every operation is a pure function of its inputs; the scheme holds no
/// mutable session state, so a single instance can serve concurrent
/// callers.
#[derive(Debug, Clone)]
pub struct CommitmentScheme<V = StrictVerifier> {
    field: Field,
    setup: TrustedSetup,
    verifier: V,
}

impl CommitmentScheme<StrictVerifier> {
    /// Creates a scheme with the refusing [`StrictVerifier`] backend.
    ///
    /// # Panics
    ///
    /// Panics if the setup was generated over a different modulus.
    pub fn new(field: Field, setup: TrustedSetup) -> Self {
        Self::with_verifier(field, setup, StrictVerifier)
    }
}

impl<V> CommitmentScheme<V>
where
    V: PairingVerifier<Commitment = Commitment, Scalar = u64, Quotient = Commitment>,
{
    /// Creates a scheme with an explicit verification backend.
    ///
    /// # Panics
    ///
    /// Panics if the setup was generated over a different modulus.
    pub fn with_verifier(field: Field, setup: TrustedSetup, verifier: V) -> Self {
        assert_eq!(setup.modulus(), field.modulus(), "field mismatch");
        CommitmentScheme {
            field,
            setup,
            verifier,
        }
    }

    /// Returns the ambient field.
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Returns the trusted setup the scheme commits against.
    pub fn setup(&self) -> &TrustedSetup {
        &self.setup
    }

    /// Returns the label of the verification backend in use.
    pub fn verifier_name(&self) -> &'static str {
        self.verifier.name()
    }

    pub(crate) fn verifier(&self) -> &V {
        &self.verifier
    }

    /// Commits to a polynomial: `sum coeff_i * setup[i] mod p`.
    ///
    /// Fails with [`Error::DegreeExceedsSetup`] when the polynomial has
    /// more coefficients than the setup has powers.
    pub fn commit(&self, polynomial: &Polynomial) -> Result<Commitment, Error> {
        let coeffs = polynomial.coefficients();
        if coeffs.len() > self.setup.size() {
            return Err(Error::DegreeExceedsSetup {
                coefficients: coeffs.len(),
                setup_size: self.setup.size(),
            });
        }
        let mut acc = 0u64;
        for (&coeff, &power) in coeffs.iter().zip(self.setup.powers()) {
            acc = self.field.add(acc, self.field.mul(coeff, power));
        }
        Ok(Commitment(acc))
    }

    /// Evaluates the polynomial at `x` and produces the opening proof
    /// for that evaluation.
    pub fn open(
        &self,
        polynomial: &Polynomial,
        x: u64,
    ) -> Result<(u64, SinglePointProof), Error> {
        let y = polynomial.evaluate(&self.field, x);
        let proof = self.prove(polynomial, x, y)?;
        Ok((y, proof))
    }

    /// Produces a proof for the claim `P(x) = y`.
    ///
    /// The quotient `(P(x) - y) / (x - x0)` is computed by synthetic
    /// division.  A claim the polynomial does not satisfy leaves a
    /// non-zero remainder and fails with [`Error::EvaluationMismatch`]
    /// carrying the actual evaluation.
    pub fn prove(
        &self,
        polynomial: &Polynomial,
        x: u64,
        y: u64,
    ) -> Result<SinglePointProof, Error> {
        let shifted = polynomial.sub(&self.field, &Polynomial::constant(y));
        let (quotient, remainder) = shifted.divide_by_linear_factor(&self.field, x);
        if remainder != 0 {
            return Err(Error::EvaluationMismatch {
                x: x % self.field.modulus(),
                claimed: y % self.field.modulus(),
                actual: polynomial.evaluate(&self.field, x),
            });
        }
        Ok(SinglePointProof {
            quotient: self.commit(&quotient)?,
        })
    }

    /// Decides the claim `P(x) = y` against a commitment and an opening
    /// proof, using the scheme's verification backend.
    ///
    /// With the default [`StrictVerifier`] this fails with
    /// [`Error::UnimplementedCryptography`]; it never fakes a positive
    /// answer.
    pub fn verify(
        &self,
        commitment: &Commitment,
        proof: &SinglePointProof,
        x: u64,
        y: u64,
    ) -> Result<bool, Error> {
        self.verifier
            .verify_opening(commitment, &proof.quotient, &x, &y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::DEFAULT_MODULUS;
    use crate::setup::{DeterministicSetupProvider, TrustedSetupProvider};
    use crate::verify::DemoVerifier;
    use proptest::prelude::*;

    fn demo_scheme(size: usize) -> CommitmentScheme<DemoVerifier> {
        let field = Field::new(DEFAULT_MODULUS);
        let setup = DeterministicSetupProvider::from_seed(42)
            .generate(&field, size)
            .unwrap();
        CommitmentScheme::with_verifier(field, setup, DemoVerifier::demonstration_only())
    }

    #[test]
    fn test_commit_rejects_oversized_polynomial() {
        let scheme = demo_scheme(4);
        let poly = Polynomial::from_coefficients(vec![1, 2, 3, 4, 5]);
        assert_eq!(
            scheme.commit(&poly),
            Err(Error::DegreeExceedsSetup {
                coefficients: 5,
                setup_size: 4
            })
        );
    }

    #[test]
    fn test_commit_is_setup_weighted_sum() {
        let scheme = demo_scheme(4);
        let poly = Polynomial::from_coefficients(vec![1, 2, 3]);
        let field = scheme.field();
        let powers = scheme.setup().powers();
        let expected = field.add(
            field.add(field.mul(1, powers[0]), field.mul(2, powers[1])),
            field.mul(3, powers[2]),
        );
        assert_eq!(scheme.commit(&poly).unwrap().value(), expected);
    }

    #[test]
    fn test_open_returns_the_evaluation() {
        let scheme = demo_scheme(8);
        let poly = Polynomial::from_coefficients(vec![1, 2, 3, 1]);
        let (y, proof) = scheme.open(&poly, 5).unwrap();
        assert_eq!(y, 211);
        let commitment = scheme.commit(&poly).unwrap();
        assert_eq!(scheme.verify(&commitment, &proof, 5, y), Ok(true));
    }

    #[test]
    fn test_prove_rejects_off_polynomial_claim() {
        let scheme = demo_scheme(8);
        let poly = Polynomial::from_coefficients(vec![1, 2, 3, 1]);
        assert_eq!(
            scheme.prove(&poly, 5, 212),
            Err(Error::EvaluationMismatch {
                x: 5,
                claimed: 212,
                actual: 211
            })
        );
    }

    #[test]
    fn test_strict_scheme_refuses_verification() {
        let field = Field::new(DEFAULT_MODULUS);
        let setup = DeterministicSetupProvider::from_seed(42)
            .generate(&field, 8)
            .unwrap();
        let scheme = CommitmentScheme::new(field, setup);
        let poly = Polynomial::from_coefficients(vec![1, 2, 3, 1]);
        let commitment = scheme.commit(&poly).unwrap();
        let proof = scheme.prove(&poly, 5, 211).unwrap();
        assert!(scheme.verify(&commitment, &proof, 5, 211).is_err());
    }

    proptest! {
        #[test]
        fn prop_commitment_is_linear(
            a in prop::collection::vec(0u64..1_000_000, 4),
            b in prop::collection::vec(0u64..1_000_000, 4),
        ) {
            let scheme = demo_scheme(4);
            let field = scheme.field();
            let pa = Polynomial::from_coefficients(a);
            let pb = Polynomial::from_coefficients(b);
            let sum = pa.add(field, &pb);
            let lhs = field.add(
                scheme.commit(&pa).unwrap().value(),
                scheme.commit(&pb).unwrap().value(),
            );
            let rhs = scheme.commit(&sum).unwrap().value();
            prop_assert_eq!(lhs, rhs);
        }
    }
}
