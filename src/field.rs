//! Layered illustration of multi-point polynomial commitment evaluation.
//! Each module isolates one rung of the ladder, from residue arithmetic up
//! to batched opening proofs and strategy selection.
//! Finite field arithmetic.
//!
//! This module provides arithmetic in a prime field.  The
//! [`Field`](struct.Field.html) type encapsulates a prime modulus and
//! exposes methods for addition, subtraction, multiplication,
//! exponentiation and inversion.  All operations reduce their results
//! modulo the field modulus; inversion runs the extended Euclidean
//! algorithm and reports the absence of an inverse as a value-level
//! error rather than panicking, since callers higher up the stack
//! (Lagrange interpolation in particular) can trigger it with otherwise
//! well-formed input.

use crate::error::Error;

/// Default modulus for hosts that do not configure their own prime:
/// the Mersenne prime `2^61 - 1`.  Large enough that the demonstration
/// scenarios never wrap, small enough that products fit in `u128`.
pub const DEFAULT_MODULUS: u64 = 2_305_843_009_213_693_951;

/// A finite field defined by an odd prime modulus.
///
/// The `Field` type stores the modulus `p` and provides elementary
/// arithmetic operations over the integers modulo `p`.  It does not
/// perform primality testing; it is the user's responsibility to
/// supply an odd prime.  If `p` is not prime, inversion will fail with
/// [`Error::NoInverse`] when called on a non-unit element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    p: u64,
}

impl Field {
    /// Creates a new finite field with the given modulus.
    ///
    /// # Panics
    ///
    /// Panics if the modulus is less than 3 or even.  Only odd primes are
    /// supported.
    pub fn new(p: u64) -> Self {
        assert!(p >= 3 && p % 2 == 1, "p must be an odd prime >= 3");
        Field { p }
    }

    /// Returns the modulus of the field.
    #[inline]
    pub fn modulus(&self) -> u64 {
        self.p
    }

    /// Adds two field elements.
    #[inline]
    pub fn add(&self, a: u64, b: u64) -> u64 {
        let mut s = (a % self.p) + (b % self.p);
        if s >= self.p {
            s -= self.p;
        }
        s
    }

    /// Subtracts `b` from `a`.
    #[inline]
    pub fn sub(&self, a: u64, b: u64) -> u64 {
        let a = a % self.p;
        let b = b % self.p;
        if a >= b {
            a - b
        } else {
            self.p - (b - a)
        }
    }

    /// Multiplies two field elements.
    #[inline]
    pub fn mul(&self, a: u64, b: u64) -> u64 {
        let a = a % self.p;
        let b = b % self.p;
        ((a as u128 * b as u128) % self.p as u128) as u64
    }

    /// Computes the multiplicative inverse of `a`.
    ///
    /// Returns [`Error::NoInverse`] when `a` is zero modulo `p`, or when
    /// the modulus is not prime and `a` shares a factor with it.
    #[inline]
    pub fn inv(&self, a: u64) -> Result<u64, Error> {
        mod_inverse(a, self.p)
    }

    /// Divides `a` by `b`, failing when `b` has no inverse.
    #[inline]
    pub fn div(&self, a: u64, b: u64) -> Result<u64, Error> {
        Ok(self.mul(a, self.inv(b)?))
    }

    /// Exponentiates `a` by `e` modulo `p`.
    #[inline]
    pub fn pow(&self, a: u64, e: u64) -> u64 {
        mod_pow(a, e, self.p)
    }
}

/// Square-and-multiply exponentiation: `base^exponent mod modulus`.
///
/// Runs in `O(log exponent)` multiplications.  Returns 0 when
/// `modulus == 1`, matching the convention that everything is congruent
/// modulo 1.
///
/// # Panics
///
/// Panics if `modulus` is zero.
pub fn mod_pow(base: u64, exponent: u64, modulus: u64) -> u64 {
    assert!(modulus != 0, "modulus must be non-zero");
    if modulus == 1 {
        return 0;
    }
    let m = modulus as u128;
    let mut base = base as u128 % m;
    let mut exponent = exponent;
    let mut result = 1u128;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = result * base % m;
        }
        base = base * base % m;
        exponent >>= 1;
    }
    result as u64
}

/// Computes the multiplicative inverse of `a` modulo `m` via the
/// extended Euclidean algorithm.
///
/// Returns [`Error::NoInverse`] when `gcd(a, m) != 1`.  The Bezout
/// coefficient can go negative during the descent; it is re-normalized
/// into `[0, m)` before being returned.
///
/// # Panics
///
/// Panics if `m` is zero.
pub fn mod_inverse(a: u64, m: u64) -> Result<u64, Error> {
    assert!(m != 0, "modulus must be non-zero");
    if m == 1 {
        // Everything is congruent to 0 mod 1, and 0 * a = 0 = 1 mod 1.
        return Ok(0);
    }
    let mut r0 = (a % m) as i128;
    let mut r1 = m as i128;
    let mut s0: i128 = 1;
    let mut s1: i128 = 0;
    while r1 != 0 {
        let q = r0 / r1;
        let r2 = r0 - q * r1;
        r0 = r1;
        r1 = r2;
        let s2 = s0 - q * s1;
        s0 = s1;
        s1 = s2;
    }
    if r0 != 1 {
        return Err(Error::NoInverse {
            value: a % m,
            modulus: m,
        });
    }
    let m = m as i128;
    Ok((((s0 % m) + m) % m) as u64)
}
