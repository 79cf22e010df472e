//! Layered illustration of multi-point polynomial commitment evaluation.
//! Each module isolates one rung of the ladder, from residue arithmetic up
//! to batched opening proofs and strategy selection.
//! Dense univariate polynomial utilities.
//!
//! This module introduces a compact representation of univariate
//! polynomials over prime fields.  Coefficients are stored explicitly in
//! ascending-degree order, enabling Horner evaluation, linear-factor
//! products, and the synthetic and long division the opening proofs are
//! built from.

use crate::error::Error;
use crate::field::Field;
use serde::{Deserialize, Serialize};

/// Represents a univariate polynomial by its coefficient vector.
///
/// Index `i` holds the coefficient of `x^i`, lowest-degree term first.
/// Trailing zero coefficients are permitted and are not canonicalized
/// away; two representations of the same polynomial may therefore differ
/// in length.  Values are immutable after construction: every operation
/// returns a new polynomial.  Arithmetic methods take the ambient
/// [`Field`] explicitly, and coefficients are reduced against it at use
/// sites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Polynomial {
    coeffs: Vec<u64>,
}

impl Polynomial {
    /// Creates a polynomial from its coefficients, lowest degree first.
    pub fn from_coefficients(coeffs: Vec<u64>) -> Self {
        Self { coeffs }
    }

    /// Creates the constant polynomial `c`.
    pub fn constant(c: u64) -> Self {
        Self { coeffs: vec![c] }
    }

    /// Creates the zero polynomial with no stored coefficients.
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// Returns the raw coefficient vector.
    pub fn coefficients(&self) -> &[u64] {
        &self.coeffs
    }

    /// Returns the nominal degree, `len - 1`.
    ///
    /// Trailing zeros are counted, so this is an upper bound on the
    /// mathematical degree.  The empty (zero) polynomial reports 0.
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Reduces the coefficient vector modulo the field and returns an
    /// owned copy.
    pub fn coefficients_mod_p(&self, field: &Field) -> Vec<u64> {
        self.coeffs.iter().map(|&c| c % field.modulus()).collect()
    }

    /// Returns `true` when every coefficient reduces to zero.
    pub fn is_zero(&self, field: &Field) -> bool {
        self.coeffs.iter().all(|&c| c % field.modulus() == 0)
    }

    /// Evaluates the polynomial at `x` using Horner's rule.
    ///
    /// The empty polynomial evaluates to 0 and a constant polynomial to
    /// its constant; `x` may be any integer and is reduced before use.
    pub fn evaluate(&self, field: &Field, x: u64) -> u64 {
        let x = x % field.modulus();
        self.coeffs
            .iter()
            .rev()
            .fold(0u64, |acc, &c| field.add(field.mul(acc, x), c))
    }

    /// Adds two polynomials coefficient-wise.
    pub fn add(&self, field: &Field, other: &Polynomial) -> Polynomial {
        let len = self.coeffs.len().max(other.coeffs.len());
        let mut out = Vec::with_capacity(len);
        for i in 0..len {
            let a = self.coeffs.get(i).copied().unwrap_or(0);
            let b = other.coeffs.get(i).copied().unwrap_or(0);
            out.push(field.add(a, b));
        }
        Polynomial { coeffs: out }
    }

    /// Subtracts `other` from `self` coefficient-wise.
    pub fn sub(&self, field: &Field, other: &Polynomial) -> Polynomial {
        let len = self.coeffs.len().max(other.coeffs.len());
        let mut out = Vec::with_capacity(len);
        for i in 0..len {
            let a = self.coeffs.get(i).copied().unwrap_or(0);
            let b = other.coeffs.get(i).copied().unwrap_or(0);
            out.push(field.sub(a, b));
        }
        Polynomial { coeffs: out }
    }

    /// Multiplies every coefficient by the scalar `k`.
    pub fn scale(&self, field: &Field, k: u64) -> Polynomial {
        Polynomial {
            coeffs: self.coeffs.iter().map(|&c| field.mul(c, k)).collect(),
        }
    }

    /// Multiplies the polynomial by the linear factor `(x - root)`.
    ///
    /// The result has exactly one more coefficient than the input.
    pub fn mul_linear_factor(&self, field: &Field, root: u64) -> Polynomial {
        let mut out = vec![0u64; self.coeffs.len() + 1];
        for (i, &c) in self.coeffs.iter().enumerate() {
            // (x - root) * c x^i contributes c to x^{i+1} and
            // -root*c to x^i.
            out[i + 1] = field.add(out[i + 1], c);
            out[i] = field.sub(out[i], field.mul(root, c));
        }
        Polynomial { coeffs: out }
    }

    /// Divides the polynomial by the linear factor `(x - x0)` using
    /// synthetic division.
    ///
    /// Returns the quotient and the remainder, which equals the
    /// polynomial evaluated at `x0`.  The identity
    /// `self = quotient * (x - x0) + remainder` holds exactly.
    pub fn divide_by_linear_factor(&self, field: &Field, x0: u64) -> (Polynomial, u64) {
        if self.coeffs.is_empty() {
            return (Polynomial::zero(), 0);
        }
        let x0 = x0 % field.modulus();
        let mut quotient = vec![0u64; self.coeffs.len() - 1];
        let mut carry = 0u64;
        for i in (0..self.coeffs.len()).rev() {
            let value = field.add(self.coeffs[i], field.mul(carry, x0));
            if i == 0 {
                return (Polynomial { coeffs: quotient }, value);
            }
            quotient[i - 1] = value;
            carry = value;
        }
        unreachable!("loop returns at i == 0");
    }

    /// Divides the polynomial by an arbitrary divisor, returning
    /// `(quotient, remainder)` with
    /// `self = quotient * divisor + remainder` and the remainder of
    /// strictly smaller degree than the divisor.
    ///
    /// Fails with [`Error::ZeroDivisor`] when every divisor coefficient
    /// reduces to zero, and propagates [`Error::NoInverse`] if the
    /// divisor's leading coefficient is not invertible (impossible over a
    /// prime modulus).
    pub fn div_rem(
        &self,
        field: &Field,
        divisor: &Polynomial,
    ) -> Result<(Polynomial, Polynomial), Error> {
        let divisor_coeffs = divisor.coefficients_mod_p(field);
        let divisor_len = divisor_coeffs
            .iter()
            .rposition(|&c| c != 0)
            .map(|i| i + 1)
            .ok_or(Error::ZeroDivisor)?;
        let lead_inv = field.inv(divisor_coeffs[divisor_len - 1])?;

        let mut remainder = self.coefficients_mod_p(field);
        if remainder.len() < divisor_len {
            return Ok((Polynomial::zero(), Polynomial { coeffs: remainder }));
        }
        let mut quotient = vec![0u64; remainder.len() - divisor_len + 1];
        for k in (0..quotient.len()).rev() {
            let coef = field.mul(remainder[k + divisor_len - 1], lead_inv);
            if coef == 0 {
                continue;
            }
            quotient[k] = coef;
            for (j, &d) in divisor_coeffs.iter().take(divisor_len).enumerate() {
                remainder[k + j] = field.sub(remainder[k + j], field.mul(coef, d));
            }
        }
        remainder.truncate(divisor_len - 1);
        Ok((
            Polynomial { coeffs: quotient },
            Polynomial { coeffs: remainder },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn field() -> Field {
        Field::new(crate::field::DEFAULT_MODULUS)
    }

    #[test]
    fn test_evaluate_concrete() {
        // P(x) = 1 + 2x + 3x^2 + x^3 at x = 5: 1 + 10 + 75 + 125 = 211.
        let poly = Polynomial::from_coefficients(vec![1, 2, 3, 1]);
        assert_eq!(poly.evaluate(&field(), 5), 211);
    }

    #[test]
    fn test_evaluate_degenerate_shapes() {
        let f = field();
        assert_eq!(Polynomial::zero().evaluate(&f, 12345), 0);
        assert_eq!(Polynomial::constant(7).evaluate(&f, 12345), 7);
    }

    #[test]
    fn test_linear_factor_product() {
        let f = Field::new(101);
        // (x - 3) * (x - 4) = x^2 - 7x + 12.
        let poly = Polynomial::constant(1)
            .mul_linear_factor(&f, 3)
            .mul_linear_factor(&f, 4);
        assert_eq!(poly.coefficients(), &[12, f.sub(0, 7), 1]);
    }

    #[test]
    fn test_synthetic_division_exact() {
        let f = field();
        // P(x) = 1 + 2x + 3x^2 + x^3, divide P - P(5) by (x - 5).
        let poly = Polynomial::from_coefficients(vec![1, 2, 3, 1]);
        let shifted = poly.sub(&f, &Polynomial::constant(211));
        let (quotient, remainder) = shifted.divide_by_linear_factor(&f, 5);
        assert_eq!(remainder, 0);
        let rebuilt = quotient.mul_linear_factor(&f, 5);
        for (i, &c) in shifted.coefficients().iter().enumerate() {
            assert_eq!(rebuilt.coefficients().get(i).copied().unwrap_or(0), c);
        }
    }

    #[test]
    fn test_synthetic_division_remainder_is_evaluation() {
        let f = Field::new(101);
        let poly = Polynomial::from_coefficients(vec![5, 0, 7, 2]);
        let (_, remainder) = poly.divide_by_linear_factor(&f, 9);
        assert_eq!(remainder, poly.evaluate(&f, 9));
    }

    #[test]
    fn test_div_rem_rejects_zero_divisor() {
        let f = Field::new(101);
        let poly = Polynomial::from_coefficients(vec![1, 2, 3]);
        let zero = Polynomial::from_coefficients(vec![0, 0]);
        assert_eq!(poly.div_rem(&f, &zero), Err(Error::ZeroDivisor));
    }

    #[test]
    fn test_div_rem_short_dividend() {
        let f = Field::new(101);
        let poly = Polynomial::from_coefficients(vec![4]);
        let divisor = Polynomial::from_coefficients(vec![1, 1, 1]);
        let (quotient, remainder) = poly.div_rem(&f, &divisor).unwrap();
        assert!(quotient.is_zero(&f));
        assert_eq!(remainder.coefficients(), &[4]);
    }

    proptest! {
        #[test]
        fn prop_horner_matches_power_accumulation(
            coeffs in prop::collection::vec(0u64..101, 0..8),
            x in 0u64..101,
        ) {
            let f = Field::new(101);
            let poly = Polynomial::from_coefficients(coeffs.clone());
            let mut expected = 0u64;
            let mut power = 1u64;
            for &c in &coeffs {
                expected = f.add(expected, f.mul(c, power));
                power = f.mul(power, x);
            }
            prop_assert_eq!(poly.evaluate(&f, x), expected);
        }

        #[test]
        fn prop_div_rem_round_trips(
            dividend in prop::collection::vec(0u64..101, 1..8),
            divisor in prop::collection::vec(0u64..101, 1..5),
        ) {
            let f = Field::new(101);
            let dividend = Polynomial::from_coefficients(dividend);
            let divisor = Polynomial::from_coefficients(divisor);
            prop_assume!(!divisor.is_zero(&f));
            let (quotient, remainder) = dividend.div_rem(&f, &divisor).unwrap();
            // quotient * divisor + remainder must evaluate identically to
            // the dividend everywhere; check a handful of points.
            for x in [0u64, 1, 2, 57, 100] {
                let q = quotient.evaluate(&f, x);
                let d = divisor.evaluate(&f, x);
                let r = remainder.evaluate(&f, x);
                prop_assert_eq!(f.add(f.mul(q, d), r), dividend.evaluate(&f, x));
            }
        }
    }
}
