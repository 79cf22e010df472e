use polycommit::{
    estimate_batch_ops, estimate_single_point_ops, CommitmentScheme, DemoVerifier,
    DeterministicSetupProvider, EvaluationPoint, EvaluationStrategy, Field, Polynomial,
    TrustedSetupProvider, DEFAULT_MODULUS,
};

fn main() {
    let field = Field::new(DEFAULT_MODULUS);
    let setup = DeterministicSetupProvider::from_seed(7)
        .generate(&field, 16)
        .expect("setup fits the ceiling");
    let scheme = CommitmentScheme::with_verifier(field, setup, DemoVerifier::demonstration_only());

    let poly = Polynomial::from_coefficients(vec![1, 2, 3, 1]);
    let points: Vec<EvaluationPoint> = [1u64, 5, 9, 14, 23]
        .iter()
        .map(|&x| EvaluationPoint::new(x, poly.evaluate(&field, x)))
        .collect();

    println!("claims: {} points, backend: {}", points.len(), scheme.verifier_name());
    for strategy in [EvaluationStrategy::SinglePoint, EvaluationStrategy::Batch] {
        let report = scheme
            .run_strategy(&poly, &points, strategy)
            .expect("honest claims verify");
        println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("report serializes")
        );
    }

    let single = estimate_single_point_ops(points.len());
    let batch = estimate_batch_ops(points.len());
    println!(
        "estimated ops: single-point {single}, batch {batch} ({}% saved)",
        100 - batch * 100 / single
    );
}
