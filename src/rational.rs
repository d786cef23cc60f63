// src/rational.rs
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::SolverError;

/// An exact fraction of arbitrary-precision integers.
///
/// Every value is kept in canonical form: the denominator is strictly
/// positive and gcd(|numerator|, denominator) = 1. Operations return new
/// values; nothing here ever touches floating point, so results are exact
/// regardless of magnitude.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rational {
    numer: BigInt,
    denom: BigInt,
}

impl Rational {
    /// Create a rational from a numerator and denominator.
    ///
    /// Fails with `DivisionByZero` if the denominator is zero. A negative
    /// denominator is normalized by negating both parts, then the fraction
    /// is reduced by the Euclidean gcd of the absolute values.
    pub fn new(numer: BigInt, denom: BigInt) -> Result<Self, SolverError> {
        if denom.is_zero() {
            return Err(SolverError::DivisionByZero);
        }
        Ok(Self::canonical(numer, denom))
    }

    /// Wrap an integer as a rational over denominator 1.
    pub fn from_integer(numer: BigInt) -> Self {
        Self {
            numer,
            denom: BigInt::one(),
        }
    }

    // Invariant: `denom` is non-zero. gcd(0, d) = d, so a zero numerator
    // canonicalizes to 0/1.
    fn canonical(mut numer: BigInt, mut denom: BigInt) -> Self {
        if denom.is_negative() {
            numer = -numer;
            denom = -denom;
        }
        let gcd = numer.gcd(&denom);
        Self {
            numer: &numer / &gcd,
            denom: &denom / &gcd,
        }
    }

    /// Add another rational, producing a new canonical value.
    pub fn add(&self, other: &Self) -> Self {
        let numer = &self.numer * &other.denom + &other.numer * &self.denom;
        let denom = &self.denom * &other.denom;
        Self::canonical(numer, denom)
    }

    /// Subtract another rational, producing a new canonical value.
    pub fn sub(&self, other: &Self) -> Self {
        let numer = &self.numer * &other.denom - &other.numer * &self.denom;
        let denom = &self.denom * &other.denom;
        Self::canonical(numer, denom)
    }

    /// Multiply by another rational, producing a new canonical value.
    pub fn mul(&self, other: &Self) -> Self {
        let numer = &self.numer * &other.numer;
        let denom = &self.denom * &other.denom;
        Self::canonical(numer, denom)
    }

    /// Divide by another rational.
    ///
    /// Fails with `DivisionByZero` when `other` is zero.
    pub fn div(&self, other: &Self) -> Result<Self, SolverError> {
        if other.numer.is_zero() {
            return Err(SolverError::DivisionByZero);
        }
        let numer = &self.numer * &other.denom;
        let denom = &self.denom * &other.numer;
        Ok(Self::canonical(numer, denom))
    }

    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    /// True when the value is representable as a plain integer.
    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    pub fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }

    /// Consume the rational and return the numerator.
    pub fn into_numer(self) -> BigInt {
        self.numer
    }

    /// The zero value, 0/1.
    pub fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    /// The one value, 1/1.
    pub fn one() -> Self {
        Self::from_integer(BigInt::one())
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denom.is_one() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(self, other: Self) -> Self {
        Rational::add(&self, &other)
    }
}

impl Add<&Rational> for Rational {
    type Output = Rational;

    fn add(self, other: &Self) -> Self {
        Rational::add(&self, other)
    }
}

impl Sub for Rational {
    type Output = Rational;

    fn sub(self, other: Self) -> Self {
        Rational::sub(&self, &other)
    }
}

impl Sub<&Rational> for Rational {
    type Output = Rational;

    fn sub(self, other: &Self) -> Self {
        Rational::sub(&self, other)
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, other: Self) -> Self {
        Rational::mul(&self, &other)
    }
}

impl Mul<&Rational> for Rational {
    type Output = Rational;

    fn mul(self, other: &Self) -> Self {
        Rational::mul(&self, other)
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Self {
        Self {
            numer: -self.numer,
            denom: self.denom,
        }
    }
}
