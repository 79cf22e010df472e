//! Layered illustration of multi-point polynomial commitment evaluation.
//! Each module isolates one rung of the ladder, from residue arithmetic up
//! to batched opening proofs and strategy selection.
//! Error taxonomy shared by every fallible operation in the crate.
//!
//! All arithmetic and construction failures are plain values returned to
//! the immediate caller; there is no global error state and no retry
//! logic, because every operation is a pure function of its inputs.  Each
//! variant carries the offending input so a host application can report
//! *what* was wrong, not merely that something was.

use thiserror::Error;

/// Coarse classification of an [`Error`], mirroring the three failure
/// families a host application is expected to distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid mathematical input (no inverse, duplicate point, degree
    /// overflow, off-polynomial claim).
    Domain,
    /// A request that exceeds a fixed implementation ceiling.
    Configuration,
    /// A cryptographic primitive that is named but not wired in.
    UnimplementedCryptography,
}

/// Errors raised by field arithmetic, commitment and batch operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("no modular inverse: gcd({value}, {modulus}) != 1")]
    /// The extended Euclidean algorithm found no multiplicative inverse.
    NoInverse {
        /// Element whose inverse was requested.
        value: u64,
        /// Modulus the inverse was requested under.
        modulus: u64,
    },
    #[error("duplicate evaluation point x = {x}")]
    /// Two evaluation claims share an x-coordinate.
    DuplicatePoint {
        /// The colliding x-coordinate, reduced into the field.
        x: u64,
    },
    #[error("claimed P({x}) = {claimed} but the polynomial evaluates to {actual}")]
    /// An opening was requested for a value the polynomial does not take.
    EvaluationMismatch {
        /// Evaluation point of the claim.
        x: u64,
        /// Claimed evaluation.
        claimed: u64,
        /// Actual evaluation of the polynomial at `x`.
        actual: u64,
    },
    #[error("division by a polynomial with no non-zero coefficient")]
    /// Polynomial division was attempted with an all-zero divisor.
    ZeroDivisor,
    #[error("polynomial has {coefficients} coefficients but the setup holds {setup_size} powers")]
    /// The polynomial outgrows the trusted setup it is committed under.
    DegreeExceedsSetup {
        /// Coefficient count of the offending polynomial.
        coefficients: usize,
        /// Number of powers the setup holds.
        setup_size: usize,
    },
    #[error("setup of size {requested} exceeds the implementation ceiling of {ceiling}")]
    /// A trusted setup larger than the hard ceiling was requested.
    SetupTooLarge {
        /// Requested number of powers.
        requested: usize,
        /// Maximum number of powers this implementation supports.
        ceiling: usize,
    },
    #[error("{operation} requires a pairing backend and none is wired in")]
    /// Verification was invoked without a real pairing backend and outside
    /// demonstration mode.
    UnimplementedCryptography {
        /// Name of the refused operation.
        operation: &'static str,
    },
    #[error("duplicate evaluation point x = {x}")]
    /// Pairing-backend variant of [`Error::DuplicatePoint`]; scalars of the
    /// backing curve do not fit in `u64`, so the coordinate is rendered.
    DuplicatePairingPoint {
        /// Decimal rendering of the colliding scalar.
        x: String,
    },
    #[error("claimed P({x}) = {claimed} but the polynomial evaluates to {actual}")]
    /// Pairing-backend variant of [`Error::EvaluationMismatch`].
    PairingEvaluationMismatch {
        /// Decimal rendering of the evaluation point.
        x: String,
        /// Decimal rendering of the claimed evaluation.
        claimed: String,
        /// Decimal rendering of the actual evaluation.
        actual: String,
    },
    #[error("decode error: {0}")]
    /// Input decoding/deserialization failure.
    Decode(String),
}

impl Error {
    /// Returns the failure family this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::SetupTooLarge { .. } => ErrorKind::Configuration,
            Error::UnimplementedCryptography { .. } => ErrorKind::UnimplementedCryptography,
            _ => ErrorKind::Domain,
        }
    }
}
