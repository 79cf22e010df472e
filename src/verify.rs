//! Layered illustration of multi-point polynomial commitment evaluation.
//! Each module isolates one rung of the ladder, from residue arithmetic up
//! to batched opening proofs and strategy selection.
//! Pluggable pairing-verification backends.
//!
//! In a sound KZG deployment, opening proofs are checked with a pairing
//! equality such as `e(C - [y]G, H) == e(W, [tau]H - [x]H)`.  The
//! simulated scheme in this crate cannot run that check: its "group
//! elements" are bare residues and the secret needed to reconstruct the
//! equation is discarded at setup time.  Rather than hard-code a stub,
//! the check is a capability.  [`StrictVerifier`] is the default and
//! refuses with an explicit error; [`DemoVerifier`] approves everything
//! and exists for demonstrations only; the `pairing` feature supplies a
//! backend that runs the real equation over BN254.

use crate::commitment::Commitment;
use crate::error::Error;

/// Backend abstraction for the pairing equality check.
///
/// Associated types let implementations choose their own element
/// representation: the simulated backends work over bare residues while
/// a curve-backed implementation works over group points.
pub trait PairingVerifier {
    /// Commitment element type.
    type Commitment;
    /// Scalar type for evaluation coordinates and coefficients.
    type Scalar;
    /// Quotient-commitment element type carried by proofs.
    type Quotient;

    /// Checks a single-point opening: given a commitment to `P`, a
    /// commitment to the quotient `(P(x) - y) / (x - x0)`, and the claim
    /// `P(x) = y`, decides whether the claim holds.
    fn verify_opening(
        &self,
        commitment: &Self::Commitment,
        quotient: &Self::Quotient,
        x: &Self::Scalar,
        y: &Self::Scalar,
    ) -> Result<bool, Error>;

    /// Checks a batch opening: given a commitment to `P`, a commitment to
    /// the quotient `(P - I) / V`, the vanishing polynomial `V` over the
    /// claimed x-coordinates and the interpolation polynomial `I` through
    /// the claimed points (both as coefficient slices, lowest degree
    /// first), decides whether every claim holds.
    fn verify_batch_opening(
        &self,
        commitment: &Self::Commitment,
        quotient: &Self::Quotient,
        vanishing: &[Self::Scalar],
        interpolation: &[Self::Scalar],
    ) -> Result<bool, Error>;

    /// Human-friendly label for reports and logging.
    fn name(&self) -> &'static str;
}

/// Default backend: refuses every check.
///
/// Without a pairing library there is no honest way to decide a proof.
/// Every method returns [`Error::UnimplementedCryptography`] naming the
/// refused operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictVerifier;

impl PairingVerifier for StrictVerifier {
    type Commitment = Commitment;
    type Scalar = u64;
    type Quotient = Commitment;

    fn verify_opening(
        &self,
        _commitment: &Commitment,
        _quotient: &Commitment,
        _x: &u64,
        _y: &u64,
    ) -> Result<bool, Error> {
        Err(Error::UnimplementedCryptography {
            operation: "verify_opening",
        })
    }

    fn verify_batch_opening(
        &self,
        _commitment: &Commitment,
        _quotient: &Commitment,
        _vanishing: &[u64],
        _interpolation: &[u64],
    ) -> Result<bool, Error> {
        Err(Error::UnimplementedCryptography {
            operation: "verify_batch_opening",
        })
    }

    fn name(&self) -> &'static str {
        "strict"
    }
}

/// Demonstration backend: approves every structurally well-formed proof.
///
/// This is the classic toy-KZG stub.  It performs no cryptography at
/// all, so it must never be the default; constructing one requires the
/// explicitly named [`DemoVerifier::demonstration_only`].
#[derive(Debug, Clone, Copy)]
pub struct DemoVerifier {
    _private: (),
}

impl DemoVerifier {
    /// Creates the always-approving backend.  The name is the warning.
    pub fn demonstration_only() -> Self {
        DemoVerifier { _private: () }
    }
}

impl PairingVerifier for DemoVerifier {
    type Commitment = Commitment;
    type Scalar = u64;
    type Quotient = Commitment;

    fn verify_opening(
        &self,
        _commitment: &Commitment,
        _quotient: &Commitment,
        _x: &u64,
        _y: &u64,
    ) -> Result<bool, Error> {
        Ok(true)
    }

    fn verify_batch_opening(
        &self,
        _commitment: &Commitment,
        _quotient: &Commitment,
        _vanishing: &[u64],
        _interpolation: &[u64],
    ) -> Result<bool, Error> {
        Ok(true)
    }

    fn name(&self) -> &'static str {
        "demo"
    }
}
