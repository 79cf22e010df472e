use polycommit::{
    CommitmentScheme, DemoVerifier, DeterministicSetupProvider, Field, Polynomial,
    TrustedSetupProvider, DEFAULT_MODULUS,
};

fn main() {
    let field = Field::new(DEFAULT_MODULUS);
    let setup = DeterministicSetupProvider::from_seed(42)
        .generate(&field, 8)
        .expect("setup fits the ceiling");
    println!("setup digest: {}", setup.digest());

    let scheme = CommitmentScheme::with_verifier(field, setup, DemoVerifier::demonstration_only());
    let poly = Polynomial::from_coefficients(vec![1, 2, 3, 1]);
    let commitment = scheme.commit(&poly).expect("polynomial fits the setup");
    println!("commitment: {}", commitment.value());

    let (y, proof) = scheme.open(&poly, 5).expect("honest opening");
    println!("P(5) = {y}");
    match scheme.verify(&commitment, &proof, 5, y) {
        Ok(true) => println!("Opening verified successfully."),
        Ok(false) => {
            eprintln!("Opening verification failed.");
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("Verification refused: {err}");
            std::process::exit(1);
        }
    }
}
