//! Layered illustration of multi-point polynomial commitment evaluation.
//! Each module isolates one rung of the ladder, from residue arithmetic up
//! to batched opening proofs and strategy selection.
//! Evaluation strategy selection and execution.
//!
//! A caller holding a polynomial and a set of evaluation claims picks a
//! strategy: open each point separately, or produce one batch proof for
//! the whole set.  Either way the result is a [`StrategyReport`] pairing
//! the verification outcome with the cost-model estimate and the
//! wall-clock time actually spent, so the claimed amortization can be
//! eyeballed against reality.  Per-point openings are independent of one
//! another and fan out across threads when the batch is large enough;
//! the interpolation pass inside a batch opening is inherently
//! sequential and stays on one thread.

use crate::batch::{estimate_batch_ops, estimate_single_point_ops, EvaluationPoint};
use crate::commitment::{Commitment, CommitmentScheme};
use crate::error::Error;
use crate::polynomial::Polynomial;
use crate::verify::PairingVerifier;
#[cfg(not(target_arch = "wasm32"))]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Minimum number of claims before per-point proving fans out across
/// threads.
#[cfg(not(target_arch = "wasm32"))]
const PARALLEL_THRESHOLD: usize = 32;

/// How a set of evaluation claims is proven and verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvaluationStrategy {
    /// One opening proof per claimed point.
    SinglePoint,
    /// One batch proof covering every claimed point.
    Batch,
}

/// Outcome of running one strategy over a set of claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyReport {
    /// Strategy that was executed.
    pub strategy: EvaluationStrategy,
    /// Whether every claim verified.
    pub verified: bool,
    /// Number of claims processed.
    pub points: usize,
    /// Cost-model estimate for this strategy at this batch size.
    pub estimated_ops: u64,
    /// Wall-clock time spent proving and verifying.
    pub elapsed: Duration,
}

impl<V> CommitmentScheme<V>
where
    V: PairingVerifier<Commitment = Commitment, Scalar = u64, Quotient = Commitment> + Sync,
{
    /// Proves and verifies a set of claims under the chosen strategy.
    ///
    /// Failures follow the strategy's own contract: an off-polynomial
    /// claim or duplicate point is a domain error, and a scheme built on
    /// the strict backend refuses with
    /// [`Error::UnimplementedCryptography`] rather than guessing.
    pub fn run_strategy(
        &self,
        polynomial: &Polynomial,
        points: &[EvaluationPoint],
        strategy: EvaluationStrategy,
    ) -> Result<StrategyReport, Error> {
        let start = Instant::now();
        let commitment = self.commit(polynomial)?;
        let verified = match strategy {
            EvaluationStrategy::SinglePoint => {
                self.verify_points_individually(polynomial, &commitment, points)?
            }
            EvaluationStrategy::Batch => {
                let proof = self.prove_batch(polynomial, points)?;
                self.verify_batch(&commitment, &proof, points)?
            }
        };
        let estimated_ops = match strategy {
            EvaluationStrategy::SinglePoint => estimate_single_point_ops(points.len()),
            EvaluationStrategy::Batch => estimate_batch_ops(points.len()),
        };
        Ok(StrategyReport {
            strategy,
            verified,
            points: points.len(),
            estimated_ops,
            elapsed: start.elapsed(),
        })
    }

    fn verify_points_individually(
        &self,
        polynomial: &Polynomial,
        commitment: &Commitment,
        points: &[EvaluationPoint],
    ) -> Result<bool, Error> {
        let use_parallel = {
            #[cfg(not(target_arch = "wasm32"))]
            {
                points.len() >= PARALLEL_THRESHOLD && rayon::current_num_threads() > 1
            }
            #[cfg(target_arch = "wasm32")]
            {
                false
            }
        };
        let outcomes: Vec<bool> = if use_parallel {
            #[cfg(not(target_arch = "wasm32"))]
            {
                points
                    .par_iter()
                    .map(|point| {
                        let proof = self.prove(polynomial, point.x, point.y)?;
                        self.verify(commitment, &proof, point.x, point.y)
                    })
                    .collect::<Result<Vec<bool>, Error>>()?
            }
            #[cfg(target_arch = "wasm32")]
            {
                Vec::new()
            }
        } else {
            let mut outcomes = Vec::with_capacity(points.len());
            for point in points {
                let proof = self.prove(polynomial, point.x, point.y)?;
                outcomes.push(self.verify(commitment, &proof, point.x, point.y)?);
            }
            outcomes
        };
        Ok(outcomes.iter().all(|&ok| ok))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{Field, DEFAULT_MODULUS};
    use crate::setup::{DeterministicSetupProvider, TrustedSetupProvider};
    use crate::verify::DemoVerifier;

    fn demo_scheme() -> CommitmentScheme<DemoVerifier> {
        let field = Field::new(DEFAULT_MODULUS);
        let setup = DeterministicSetupProvider::from_seed(42)
            .generate(&field, 8)
            .unwrap();
        CommitmentScheme::with_verifier(field, setup, DemoVerifier::demonstration_only())
    }

    fn honest_points(
        scheme: &CommitmentScheme<DemoVerifier>,
        poly: &Polynomial,
        xs: &[u64],
    ) -> Vec<EvaluationPoint> {
        xs.iter()
            .map(|&x| EvaluationPoint::new(x, poly.evaluate(scheme.field(), x)))
            .collect()
    }

    #[test]
    fn test_both_strategies_verify_honest_claims() {
        let scheme = demo_scheme();
        let poly = Polynomial::from_coefficients(vec![1, 2, 3, 1]);
        let points = honest_points(&scheme, &poly, &[1, 5, 9, 14, 23]);

        let single = scheme
            .run_strategy(&poly, &points, EvaluationStrategy::SinglePoint)
            .unwrap();
        assert!(single.verified);
        assert_eq!(single.estimated_ops, 250_000);

        let batch = scheme
            .run_strategy(&poly, &points, EvaluationStrategy::Batch)
            .unwrap();
        assert!(batch.verified);
        assert_eq!(batch.estimated_ops, 55_000);
        assert_eq!(batch.points, 5);
    }

    #[test]
    fn test_strategy_surfaces_bad_claim() {
        let scheme = demo_scheme();
        let poly = Polynomial::from_coefficients(vec![1, 2, 3, 1]);
        let mut points = honest_points(&scheme, &poly, &[1, 5, 9]);
        points[1].y += 1;
        for strategy in [EvaluationStrategy::SinglePoint, EvaluationStrategy::Batch] {
            let err = scheme.run_strategy(&poly, &points, strategy).unwrap_err();
            assert!(matches!(err, Error::EvaluationMismatch { x: 5, .. }));
        }
    }

    #[test]
    fn test_parallel_path_matches_sequential() {
        let scheme = demo_scheme();
        let poly = Polynomial::from_coefficients(vec![4, 0, 2, 7]);
        // Enough points to cross the parallel threshold.
        let xs: Vec<u64> = (1..=64).collect();
        let points = honest_points(&scheme, &poly, &xs);
        let report = scheme
            .run_strategy(&poly, &points, EvaluationStrategy::SinglePoint)
            .unwrap();
        assert!(report.verified);
        assert_eq!(report.points, 64);
    }

    #[test]
    fn test_report_serializes() {
        let scheme = demo_scheme();
        let poly = Polynomial::from_coefficients(vec![1, 2, 3, 1]);
        let points = honest_points(&scheme, &poly, &[2, 4]);
        let report = scheme
            .run_strategy(&poly, &points, EvaluationStrategy::Batch)
            .unwrap();
        let encoded = serde_json::to_string(&report).unwrap();
        let decoded: StrategyReport = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded.strategy, EvaluationStrategy::Batch);
        assert_eq!(decoded.points, 2);
        assert!(decoded.verified);
    }
}
