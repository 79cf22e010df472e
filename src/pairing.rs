//! Layered illustration of multi-point polynomial commitment evaluation.
//! Each module isolates one rung of the ladder, from residue arithmetic up
//! to batched opening proofs and strategy selection.
//! Curve-backed commitment scheme over BN254.
//!
//! This module is the production counterpart of the simulated scheme:
//! commitments are G1 points, the trusted setup carries powers of the
//! secret in both source groups, and opening proofs are decided by the
//! genuine pairing equations `e(C - [y]G, H) == e(W, [tau]H - [x]H)`
//! and, for batches, `e(C - [I(tau)]G, H) == e(W, [V(tau)]H)`.  The
//! setup here is still generated by a single party, so it demonstrates
//! the mathematics, not a ceremony.

use crate::error::Error;
use crate::setup::MAX_SETUP_SIZE;
use crate::verify::PairingVerifier;
use ark_bn254::{Bn254, Fr, G1Projective, G2Projective};
use ark_ec::pairing::Pairing;
use ark_ec::Group;
use ark_ff::{Field, One, Zero};
use ark_poly::univariate::DensePolynomial;
use ark_poly::{DenseUVPolynomial, Polynomial};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, Compress, Validate};
use ark_std::rand::Rng;
use ark_std::UniformRand;
use std::io::Cursor;

/// Powers of the setup secret in both source groups of BN254.
///
/// `g1_powers[i] = [tau^i]G` and `g2_powers[i] = [tau^i]H`.  The G2
/// powers are what let the verifier evaluate vanishing polynomials "in
/// the exponent" during batch checks.
#[derive(Debug, Clone)]
pub struct Bn254Setup {
    g1: G1Projective,
    g2: G2Projective,
    g1_powers: Vec<G1Projective>,
    g2_powers: Vec<G2Projective>,
}

impl Bn254Setup {
    /// Draws a secret, derives `size` powers in each group and discards
    /// the secret.
    ///
    /// `size` bounds the number of commitable coefficients, exactly as
    /// in the simulated scheme, and shares its ceiling.
    ///
    /// # Panics
    ///
    /// Panics if `size < 2`; the single-point pairing check needs
    /// `[tau]H` and a smaller setup cannot express it.
    pub fn generate(size: usize, rng: &mut impl Rng) -> Result<Self, Error> {
        assert!(size >= 2, "setup must hold at least [1]H and [tau]H");
        if size > MAX_SETUP_SIZE {
            return Err(Error::SetupTooLarge {
                requested: size,
                ceiling: MAX_SETUP_SIZE,
            });
        }
        let g1 = G1Projective::generator();
        let g2 = G2Projective::generator();
        let tau = Fr::rand(rng);
        let mut g1_powers = Vec::with_capacity(size);
        let mut g2_powers = Vec::with_capacity(size);
        let mut power = Fr::one();
        for _ in 0..size {
            g1_powers.push(g1 * power);
            g2_powers.push(g2 * power);
            power *= tau;
        }
        Ok(Bn254Setup {
            g1,
            g2,
            g1_powers,
            g2_powers,
        })
    }

    /// Returns the number of powers held per group.
    pub fn size(&self) -> usize {
        self.g1_powers.len()
    }

    fn commit_g1(&self, coeffs: &[Fr]) -> Result<G1Projective, Error> {
        if coeffs.len() > self.g1_powers.len() {
            return Err(Error::DegreeExceedsSetup {
                coefficients: coeffs.len(),
                setup_size: self.g1_powers.len(),
            });
        }
        let mut acc = G1Projective::zero();
        for (coeff, power) in coeffs.iter().zip(&self.g1_powers) {
            acc += *power * *coeff;
        }
        Ok(acc)
    }

    fn combine_g2(&self, coeffs: &[Fr]) -> Result<G2Projective, Error> {
        if coeffs.len() > self.g2_powers.len() {
            return Err(Error::DegreeExceedsSetup {
                coefficients: coeffs.len(),
                setup_size: self.g2_powers.len(),
            });
        }
        let mut acc = G2Projective::zero();
        for (coeff, power) in coeffs.iter().zip(&self.g2_powers) {
            acc += *power * *coeff;
        }
        Ok(acc)
    }
}

/// Opening proof for a single evaluation claim over BN254.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bn254OpeningProof {
    /// The evaluation point.
    pub x: Fr,
    /// The evaluation result.
    pub y: Fr,
    /// Commitment to the quotient polynomial.
    pub quotient: G1Projective,
}

impl Bn254OpeningProof {
    /// Serializes the proof in compressed form.
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        let mut out = Vec::new();
        self.x
            .serialize_compressed(&mut out)
            .map_err(|e| Error::Decode(e.to_string()))?;
        self.y
            .serialize_compressed(&mut out)
            .map_err(|e| Error::Decode(e.to_string()))?;
        self.quotient
            .serialize_compressed(&mut out)
            .map_err(|e| Error::Decode(e.to_string()))?;
        Ok(out)
    }

    /// Deserializes a proof produced by [`Self::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let mut cursor = Cursor::new(bytes);
        let x = Fr::deserialize_with_mode(&mut cursor, Compress::Yes, Validate::Yes)
            .map_err(|e| Error::Decode(e.to_string()))?;
        let y = Fr::deserialize_with_mode(&mut cursor, Compress::Yes, Validate::Yes)
            .map_err(|e| Error::Decode(e.to_string()))?;
        let quotient =
            G1Projective::deserialize_with_mode(&mut cursor, Compress::Yes, Validate::Yes)
                .map_err(|e| Error::Decode(e.to_string()))?;
        Ok(Bn254OpeningProof { x, y, quotient })
    }
}

/// Batch opening proof over BN254: the vanishing and interpolation
/// polynomials as coefficient vectors plus the quotient commitment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bn254BatchProof {
    /// Vanishing polynomial over the claimed x-coordinates.
    pub vanishing: Vec<Fr>,
    /// Interpolation polynomial through the claimed points.
    pub interpolation: Vec<Fr>,
    /// Commitment to the quotient `(P - I) / V`.
    pub quotient: G1Projective,
}

/// Commitment scheme over BN254 with real pairing verification.
#[derive(Debug, Clone)]
pub struct Bn254Scheme {
    setup: Bn254Setup,
}

impl Bn254Scheme {
    /// Wraps a generated setup.
    pub fn new(setup: Bn254Setup) -> Self {
        Bn254Scheme { setup }
    }

    /// Returns the underlying setup.
    pub fn setup(&self) -> &Bn254Setup {
        &self.setup
    }

    /// Returns the pairing verifier for this scheme's setup.
    pub fn verifier(&self) -> Bn254Verifier<'_> {
        Bn254Verifier { setup: &self.setup }
    }

    /// Commits to a polynomial given by its coefficients, lowest degree
    /// first.
    pub fn commit(&self, coeffs: &[Fr]) -> Result<G1Projective, Error> {
        self.setup.commit_g1(coeffs)
    }

    /// Evaluates the polynomial at `x` and produces the opening proof.
    pub fn open(&self, coeffs: &[Fr], x: Fr) -> Result<Bn254OpeningProof, Error> {
        let poly = DensePolynomial::from_coefficients_slice(coeffs);
        let y = poly.evaluate(&x);
        let numerator = &poly - &DensePolynomial::from_coefficients_slice(&[y]);
        let denominator = DensePolynomial::from_coefficients_slice(&[-x, Fr::one()]);
        let quotient_poly = &numerator / &denominator;
        debug_assert_eq!(
            &(&quotient_poly * &denominator),
            &numerator,
            "(P - y) is divisible by (x - x0) when y = P(x0)"
        );
        let quotient = self.setup.commit_g1(&quotient_poly.coeffs)?;
        Ok(Bn254OpeningProof { x, y, quotient })
    }

    /// Produces a batch proof for a set of evaluation claims.
    ///
    /// Duplicate x-coordinates and claims the polynomial does not
    /// satisfy are rejected with errors naming the offending scalar.
    pub fn open_batch(
        &self,
        coeffs: &[Fr],
        points: &[(Fr, Fr)],
    ) -> Result<Bn254BatchProof, Error> {
        let poly = DensePolynomial::from_coefficients_slice(coeffs);
        for (x, y) in points {
            let actual = poly.evaluate(x);
            if actual != *y {
                return Err(Error::PairingEvaluationMismatch {
                    x: x.to_string(),
                    claimed: y.to_string(),
                    actual: actual.to_string(),
                });
            }
        }
        let xs: Vec<Fr> = points.iter().map(|(x, _)| *x).collect();
        let vanishing = vanishing_polynomial(&xs);
        let interpolation = lagrange_interpolation(points)?;
        let difference = &poly - &DensePolynomial::from_coefficients_slice(&interpolation);
        let quotient_poly = if difference.is_zero() {
            DensePolynomial::from_coefficients_vec(Vec::new())
        } else {
            &difference / &DensePolynomial::from_coefficients_slice(&vanishing)
        };
        let quotient = self.setup.commit_g1(&quotient_poly.coeffs)?;
        Ok(Bn254BatchProof {
            vanishing,
            interpolation,
            quotient,
        })
    }

    /// Decides a single-point opening proof with the pairing check.
    pub fn verify(
        &self,
        commitment: &G1Projective,
        proof: &Bn254OpeningProof,
    ) -> Result<bool, Error> {
        self.verifier()
            .verify_opening(commitment, &proof.quotient, &proof.x, &proof.y)
    }

    /// Decides a batch proof against the claimed points.
    ///
    /// As in the simulated scheme, the vanishing and interpolation
    /// polynomials are recomputed from the claims; a proof carrying
    /// different ones is rejected before any pairing is evaluated.
    pub fn verify_batch(
        &self,
        commitment: &G1Projective,
        proof: &Bn254BatchProof,
        points: &[(Fr, Fr)],
    ) -> Result<bool, Error> {
        let xs: Vec<Fr> = points.iter().map(|(x, _)| *x).collect();
        if proof.vanishing != vanishing_polynomial(&xs)
            || proof.interpolation != lagrange_interpolation(points)?
        {
            return Ok(false);
        }
        self.verifier().verify_batch_opening(
            commitment,
            &proof.quotient,
            &proof.vanishing,
            &proof.interpolation,
        )
    }
}

/// Pairing-equation verifier borrowing a [`Bn254Setup`].
///
/// This is the real backend the simulated scheme's
/// [`StrictVerifier`](crate::verify::StrictVerifier) refuses in place
/// of.
#[derive(Debug, Clone, Copy)]
pub struct Bn254Verifier<'a> {
    setup: &'a Bn254Setup,
}

impl PairingVerifier for Bn254Verifier<'_> {
    type Commitment = G1Projective;
    type Scalar = Fr;
    type Quotient = G1Projective;

    fn verify_opening(
        &self,
        commitment: &G1Projective,
        quotient: &G1Projective,
        x: &Fr,
        y: &Fr,
    ) -> Result<bool, Error> {
        // e(C - [y]G, H) == e(W, [tau]H - [x]H).
        let tau_minus_x = self.setup.g2_powers[1] - self.setup.g2 * *x;
        let lhs = Bn254::pairing(*commitment - self.setup.g1 * *y, self.setup.g2);
        let rhs = Bn254::pairing(*quotient, tau_minus_x);
        Ok(lhs == rhs)
    }

    fn verify_batch_opening(
        &self,
        commitment: &G1Projective,
        quotient: &G1Projective,
        vanishing: &[Fr],
        interpolation: &[Fr],
    ) -> Result<bool, Error> {
        // e(C - [I(tau)]G, H) == e(W, [V(tau)]H).
        let interpolation_at_tau = self.setup.commit_g1(interpolation)?;
        let vanishing_at_tau = self.setup.combine_g2(vanishing)?;
        let lhs = Bn254::pairing(*commitment - interpolation_at_tau, self.setup.g2);
        let rhs = Bn254::pairing(*quotient, vanishing_at_tau);
        Ok(lhs == rhs)
    }

    fn name(&self) -> &'static str {
        "bn254"
    }
}

/// Builds `V(x) = prod (x - x_i)` over the scalar field, left to right.
fn vanishing_polynomial(xs: &[Fr]) -> Vec<Fr> {
    let mut acc = DensePolynomial::from_coefficients_vec(vec![Fr::one()]);
    for &x in xs {
        acc = &acc * &DensePolynomial::from_coefficients_slice(&[-x, Fr::one()]);
    }
    acc.coeffs
}

/// Interpolates through the points over the scalar field, rejecting
/// duplicate x-coordinates.
fn lagrange_interpolation(points: &[(Fr, Fr)]) -> Result<Vec<Fr>, Error> {
    for (i, (xi, _)) in points.iter().enumerate() {
        for (xj, _) in &points[i + 1..] {
            if xi == xj {
                return Err(Error::DuplicatePairingPoint { x: xi.to_string() });
            }
        }
    }
    let mut acc = DensePolynomial::from_coefficients_vec(Vec::new());
    for (i, (xi, yi)) in points.iter().enumerate() {
        let mut numerator = DensePolynomial::from_coefficients_vec(vec![Fr::one()]);
        let mut denominator = Fr::one();
        for (j, (xj, _)) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            numerator = &numerator * &DensePolynomial::from_coefficients_slice(&[-*xj, Fr::one()]);
            denominator *= *xi - *xj;
        }
        let inverse = denominator
            .inverse()
            .ok_or_else(|| Error::DuplicatePairingPoint { x: xi.to_string() })?;
        let weight = *yi * inverse;
        let scaled = DensePolynomial::from_coefficients_vec(
            numerator.coeffs.iter().map(|c| *c * weight).collect(),
        );
        acc = &acc + &scaled;
    }
    Ok(acc.coeffs)
}
