#![deny(missing_docs)]

//! Layered illustration of multi-point polynomial commitment evaluation.
//! Each module isolates one rung of the ladder, from residue arithmetic up
//! to batched opening proofs and strategy selection.
//! # polycommit
//!
//! **polycommit** is a compact Rust crate that illustrates KZG-style
//! polynomial commitments and, in particular, the trade-off between
//! opening a commitment at many points one proof at a time versus
//! producing a single batch proof for the whole evaluation set.  The
//! crate is layered the way the mathematics is:
//!
//! * **Finite field arithmetic** via the [`Field`] type, including
//!   extended-Euclidean inversion ([`mod_inverse`]) and square-and-
//!   multiply exponentiation ([`mod_pow`]).
//! * **Dense univariate polynomials** via [`Polynomial`]: Horner
//!   evaluation, linear-factor products, synthetic and long division.
//! * **Simulated commitments** via [`CommitmentScheme`]: a write-once
//!   [`TrustedSetup`] behind the [`TrustedSetupProvider`] capability,
//!   coefficient commitments, and single-point opening proofs built from
//!   real quotient division.
//! * **Batch evaluation** via [`vanishing_polynomial`],
//!   [`lagrange_interpolation`] and [`CommitmentScheme::prove_batch`],
//!   with pure cost models ([`estimate_single_point_ops`],
//!   [`estimate_batch_ops`]) quantifying the amortization.
//! * **Pluggable verification** via the [`PairingVerifier`] capability:
//!   the default [`StrictVerifier`] refuses to pretend, the explicit
//!   [`DemoVerifier`] approves everything for demonstrations, and the
//!   `pairing` feature supplies a genuine BN254 backend.
//!
//! The simulated scheme is **not cryptographically sound**: its group
//! elements are bare residues and its setup has no ceremony.  It exists
//! to make the algebra of multi-point openings observable in a debugger.
//!
//! ## Usage
//!
//! Commit to `P(x) = 1 + 2x + 3x^2 + x^3`, claim its values at a few
//! points, and compare both evaluation strategies:
//!
//! ```rust
//! use polycommit::{
//!     CommitmentScheme, DemoVerifier, DeterministicSetupProvider, EvaluationPoint,
//!     EvaluationStrategy, Field, Polynomial, TrustedSetupProvider, DEFAULT_MODULUS,
//! };
//!
//! let field = Field::new(DEFAULT_MODULUS);
//! let setup = DeterministicSetupProvider::from_seed(42)
//!     .generate(&field, 8)
//!     .unwrap();
//! let scheme =
//!     CommitmentScheme::with_verifier(field, setup, DemoVerifier::demonstration_only());
//!
//! let poly = Polynomial::from_coefficients(vec![1, 2, 3, 1]);
//! let points: Vec<EvaluationPoint> = [1, 5, 9]
//!     .iter()
//!     .map(|&x| EvaluationPoint::new(x, poly.evaluate(&field, x)))
//!     .collect();
//!
//! let report = scheme
//!     .run_strategy(&poly, &points, EvaluationStrategy::Batch)
//!     .unwrap();
//! assert!(report.verified);
//! ```
//!
//! The crate can be extended with richer openings by building on these
//! primitives.  It is intentionally minimal and does not offer a
//! complete proof system.

mod batch;
mod commitment;
mod error;
mod field;
#[cfg(feature = "pairing")]
pub mod pairing;
mod polynomial;
mod prng;
mod setup;
mod strategy;
mod verify;

pub use batch::{
    estimate_batch_ops, estimate_single_point_ops, lagrange_interpolation, vanishing_polynomial,
    BatchProof, EvaluationPoint, BATCH_BASE_OPS, BATCH_PER_POINT_OPS, SINGLE_POINT_OP_COST,
};
pub use commitment::{Commitment, CommitmentScheme, SinglePointProof};
pub use error::{Error, ErrorKind};
pub use field::{mod_inverse, mod_pow, Field, DEFAULT_MODULUS};
pub use polynomial::Polynomial;
pub use setup::{
    DeterministicSetupProvider, RandomSetupProvider, TrustedSetup, TrustedSetupProvider,
    MAX_SETUP_SIZE, SETUP_GENERATOR,
};
pub use strategy::{EvaluationStrategy, StrategyReport};
pub use verify::{DemoVerifier, PairingVerifier, StrictVerifier};
