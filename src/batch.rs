//! Layered illustration of multi-point polynomial commitment evaluation.
//! Each module isolates one rung of the ladder, from residue arithmetic up
//! to batched opening proofs and strategy selection.
//! Multi-point batch evaluation proofs.
//!
//! Verifying `n` evaluation claims one at a time costs a fixed amount
//! per point.  The batch construction amortizes that cost: build the
//! vanishing polynomial `V(x) = prod (x - x_i)` over the claimed
//! x-coordinates, interpolate the unique polynomial `I` of degree `< n`
//! through the claimed points, and commit once to the quotient
//! `(P - I) / V`.  The division is exact precisely when every claim lies
//! on `P`, which is what the pairing check ultimately tests.  The cost
//! models at the bottom of this module quantify the amortization and are
//! plain arithmetic, usable directly in property tests.

use crate::commitment::{Commitment, CommitmentScheme};
use crate::error::Error;
use crate::field::Field;
use crate::polynomial::Polynomial;
use crate::verify::PairingVerifier;
use serde::{Deserialize, Serialize};

/// Simulated per-point cost of producing and checking one single-point
/// opening.
pub const SINGLE_POINT_OP_COST: u64 = 50_000;

/// Simulated fixed overhead of a batch opening (vanishing polynomial,
/// interpolation, one quotient commitment).
pub const BATCH_BASE_OPS: u64 = 30_000;

/// Simulated marginal cost of each additional point inside a batch.
pub const BATCH_PER_POINT_OPS: u64 = 5_000;

/// One evaluation claim: the assertion that `P(x) = y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationPoint {
    /// The point the polynomial is claimed to be evaluated at.
    pub x: u64,
    /// The claimed evaluation.
    pub y: u64,
}

impl EvaluationPoint {
    /// Creates a claim `P(x) = y`.
    pub fn new(x: u64, y: u64) -> Self {
        EvaluationPoint { x, y }
    }
}

/// Proof that a committed polynomial passes through a whole set of
/// points at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchProof {
    /// Vanishing polynomial over the claimed x-coordinates.
    pub vanishing: Polynomial,
    /// Interpolation polynomial through the claimed points.
    pub interpolation: Polynomial,
    /// Commitment to the quotient `(P - I) / V`.
    pub quotient: Commitment,
}

/// Builds the vanishing polynomial `V(x) = prod (x - x_i)`.
///
/// The product is commutative, but factors are folded in left to right
/// so the coefficient sequence is deterministic for a given input order.
/// Degree equals the number of points; the empty product is the constant
/// 1.
pub fn vanishing_polynomial(field: &Field, xs: &[u64]) -> Polynomial {
    let mut acc = Polynomial::constant(1);
    for &x in xs {
        acc = acc.mul_linear_factor(field, x);
    }
    acc
}

/// Interpolates the unique polynomial of degree `< n` through `n`
/// points, as `sum_i y_i * L_i(x)` with
/// `L_i(x) = prod_{j != i} (x - x_j) / (x_i - x_j)`.
///
/// Duplicate x-coordinates make the basis denominators vanish; they are
/// rejected up front with [`Error::DuplicatePoint`] naming the colliding
/// coordinate rather than surfacing later as a missing inverse.
pub fn lagrange_interpolation(
    field: &Field,
    points: &[EvaluationPoint],
) -> Result<Polynomial, Error> {
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            if a.x % field.modulus() == b.x % field.modulus() {
                return Err(Error::DuplicatePoint {
                    x: b.x % field.modulus(),
                });
            }
        }
    }
    let mut acc = Polynomial::zero();
    for (i, point) in points.iter().enumerate() {
        let mut numerator = Polynomial::constant(1);
        let mut denominator = 1u64;
        for (j, other) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            numerator = numerator.mul_linear_factor(field, other.x);
            denominator = field.mul(denominator, field.sub(point.x, other.x));
        }
        let weight = field.mul(point.y, field.inv(denominator)?);
        acc = acc.add(field, &numerator.scale(field, weight));
    }
    Ok(acc)
}

impl<V> CommitmentScheme<V>
where
    V: PairingVerifier<Commitment = Commitment, Scalar = u64, Quotient = Commitment>,
{
    /// Produces a batch proof for a set of evaluation claims.
    ///
    /// Each claim is checked against the polynomial first, so a wrong
    /// `y_i` fails with [`Error::EvaluationMismatch`] identifying the
    /// offending point; duplicates fail with [`Error::DuplicatePoint`].
    /// The quotient `(P - I) / V` is then computed by long division.
    pub fn prove_batch(
        &self,
        polynomial: &Polynomial,
        points: &[EvaluationPoint],
    ) -> Result<BatchProof, Error> {
        let field = *self.field();
        for point in points {
            let actual = polynomial.evaluate(&field, point.x);
            if actual != point.y % field.modulus() {
                return Err(Error::EvaluationMismatch {
                    x: point.x % field.modulus(),
                    claimed: point.y % field.modulus(),
                    actual,
                });
            }
        }
        let xs: Vec<u64> = points.iter().map(|p| p.x).collect();
        let vanishing = vanishing_polynomial(&field, &xs);
        let interpolation = lagrange_interpolation(&field, points)?;
        let difference = polynomial.sub(&field, &interpolation);
        let (quotient, remainder) = difference.div_rem(&field, &vanishing)?;
        debug_assert!(
            remainder.is_zero(&field),
            "claims verified point-wise, so V must divide P - I"
        );
        Ok(BatchProof {
            vanishing,
            interpolation,
            quotient: self.commit(&quotient)?,
        })
    }

    /// Decides a batch proof against a commitment and the claimed
    /// points.
    ///
    /// The vanishing and interpolation polynomials are recomputed from
    /// the claims; a proof carrying different ones cannot be valid and
    /// is rejected outright.  The quotient check itself is delegated to
    /// the scheme's verification backend.
    pub fn verify_batch(
        &self,
        commitment: &Commitment,
        proof: &BatchProof,
        points: &[EvaluationPoint],
    ) -> Result<bool, Error> {
        let field = self.field();
        let xs: Vec<u64> = points.iter().map(|p| p.x).collect();
        let expected_vanishing = vanishing_polynomial(field, &xs);
        let expected_interpolation = lagrange_interpolation(field, points)?;
        if proof
            .vanishing
            .sub(field, &expected_vanishing)
            .coefficients()
            .iter()
            .any(|&c| c != 0)
            || proof
                .interpolation
                .sub(field, &expected_interpolation)
                .coefficients()
                .iter()
                .any(|&c| c != 0)
        {
            return Ok(false);
        }
        self.verifier().verify_batch_opening(
            commitment,
            &proof.quotient,
            proof.vanishing.coefficients(),
            proof.interpolation.coefficients(),
        )
    }
}

/// Estimated operation count for verifying `count` claims one opening
/// at a time: a fixed cost per point, linear in the batch size.
pub fn estimate_single_point_ops(count: usize) -> u64 {
    SINGLE_POINT_OP_COST * count as u64
}

/// Estimated operation count for verifying `count` claims with one
/// batch opening: a fixed base plus a much smaller marginal cost per
/// point.
pub fn estimate_batch_ops(count: usize) -> u64 {
    BATCH_BASE_OPS + BATCH_PER_POINT_OPS * count as u64
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
    fn test_vanishing_polynomial_has_claimed_roots() {
        let field = Field::new(DEFAULT_MODULUS);
        let xs = [2u64, 9, 31, 77];
        let vanishing = vanishing_polynomial(&field, &xs);
        assert_eq!(vanishing.degree(), xs.len());
        for &x in &xs {
            assert_eq!(vanishing.evaluate(&field, x), 0);
        }
        // A non-root must not vanish.
        assert_ne!(vanishing.evaluate(&field, 5), 0);
    }

    #[test]
    fn test_vanishing_polynomial_empty_product() {
        let field = Field::new(101);
        let vanishing = vanishing_polynomial(&field, &[]);
        assert_eq!(vanishing.coefficients(), &[1]);
    }

    #[test]
    fn test_interpolation_round_trip() {
        let field = Field::new(DEFAULT_MODULUS);
        let points = [
            EvaluationPoint::new(1, 10),
            EvaluationPoint::new(2, 40),
            EvaluationPoint::new(3, 90),
            EvaluationPoint::new(7, 13),
        ];
        let interpolation = lagrange_interpolation(&field, &points).unwrap();
        assert!(interpolation.degree() < points.len());
        for point in &points {
            assert_eq!(interpolation.evaluate(&field, point.x), point.y);
        }
    }

    #[test]
    fn test_interpolation_rejects_duplicates() {
        let field = Field::new(DEFAULT_MODULUS);
        let points = [
            EvaluationPoint::new(4, 1),
            EvaluationPoint::new(9, 2),
            EvaluationPoint::new(4, 3),
        ];
        assert_eq!(
            lagrange_interpolation(&field, &points),
            Err(Error::DuplicatePoint { x: 4 })
        );
    }

    #[test]
    fn test_batch_proof_round_trip() {
        let scheme = demo_scheme(8);
        let field = *scheme.field();
        let poly = Polynomial::from_coefficients(vec![1, 2, 3, 1]);
        let points: Vec<EvaluationPoint> = [1u64, 5, 9]
            .iter()
            .map(|&x| EvaluationPoint::new(x, poly.evaluate(&field, x)))
            .collect();
        let commitment = scheme.commit(&poly).unwrap();
        let proof = scheme.prove_batch(&poly, &points).unwrap();
        assert_eq!(scheme.verify_batch(&commitment, &proof, &points), Ok(true));
    }

    #[test]
    fn test_batch_proof_quotient_reconstructs_difference() {
        let scheme = demo_scheme(8);
        let field = *scheme.field();
        let poly = Polynomial::from_coefficients(vec![3, 0, 1, 4, 1]);
        let points: Vec<EvaluationPoint> = [2u64, 6, 11]
            .iter()
            .map(|&x| EvaluationPoint::new(x, poly.evaluate(&field, x)))
            .collect();
        let proof = scheme.prove_batch(&poly, &points).unwrap();
        // P - I must vanish on every claimed x.
        let difference = poly.sub(&field, &proof.interpolation);
        for point in &points {
            assert_eq!(difference.evaluate(&field, point.x), 0);
        }
    }

    #[test]
    fn test_batch_proof_rejects_wrong_claim() {
        let scheme = demo_scheme(8);
        let field = *scheme.field();
        let poly = Polynomial::from_coefficients(vec![1, 2, 3, 1]);
        let actual = poly.evaluate(&field, 5);
        let points = [
            EvaluationPoint::new(1, poly.evaluate(&field, 1)),
            EvaluationPoint::new(5, actual + 1),
        ];
        assert_eq!(
            scheme.prove_batch(&poly, &points),
            Err(Error::EvaluationMismatch {
                x: 5,
                claimed: actual + 1,
                actual
            })
        );
    }

    #[test]
    fn test_batch_verify_rejects_tampered_interpolation() {
        let scheme = demo_scheme(8);
        let field = *scheme.field();
        let poly = Polynomial::from_coefficients(vec![1, 2, 3, 1]);
        let points: Vec<EvaluationPoint> = [1u64, 5]
            .iter()
            .map(|&x| EvaluationPoint::new(x, poly.evaluate(&field, x)))
            .collect();
        let commitment = scheme.commit(&poly).unwrap();
        let mut proof = scheme.prove_batch(&poly, &points).unwrap();
        proof.interpolation = proof.interpolation.add(&field, &Polynomial::constant(1));
        assert_eq!(scheme.verify_batch(&commitment, &proof, &points), Ok(false));
    }

    #[test]
    fn test_cost_model_concrete_scenario() {
        assert_eq!(estimate_single_point_ops(5), 250_000);
        assert_eq!(estimate_batch_ops(5), 55_000);
        // Batch saves 78% on the five-point scenario.
        let saving = 100 - estimate_batch_ops(5) * 100 / estimate_single_point_ops(5);
        assert_eq!(saving, 78);
    }

    #[test]
    fn test_cost_model_batch_grows_slower() {
        let mut previous_gap = 0u64;
        for n in [1usize, 5, 20, 100] {
            let single = estimate_single_point_ops(n);
            let batch = estimate_batch_ops(n);
            assert!(batch < single, "batch must undercut per-point at n = {n}");
            let gap = single - batch;
            assert!(gap > previous_gap, "the saving must widen with n");
            previous_gap = gap;
        }
    }

    proptest! {
        #[test]
        fn prop_interpolation_reproduces_values(
            xs in prop::collection::hash_set(0u64..10_000, 1..8),
            seed in 0u64..1_000_000,
        ) {
            let field = Field::new(DEFAULT_MODULUS);
            let points: Vec<EvaluationPoint> = xs
                .iter()
                .enumerate()
                .map(|(i, &x)| EvaluationPoint::new(x, seed.wrapping_mul(i as u64 + 1) % 10_000))
                .collect();
            let interpolation = lagrange_interpolation(&field, &points).unwrap();
            for point in &points {
                prop_assert_eq!(interpolation.evaluate(&field, point.x), point.y);
            }
        }

        #[test]
        fn prop_vanishing_roots(xs in prop::collection::hash_set(0u64..10_000, 1..8)) {
            let field = Field::new(DEFAULT_MODULUS);
            let xs: Vec<u64> = xs.into_iter().collect();
            let vanishing = vanishing_polynomial(&field, &xs);
            for &x in &xs {
                prop_assert_eq!(vanishing.evaluate(&field, x), 0);
            }
        }
    }
}
