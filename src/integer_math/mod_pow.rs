// src/integer_math/mod_pow.rs

use num::{BigInt, Integer, One, Signed};
use crate::core::error::MathError;

pub struct ModPow;

impl ModPow {
    /// Binary (square-and-multiply) exponentiation without reduction.
    ///
    /// Intermediate products grow without bound, which is why this operates
    /// on `BigInt` rather than a fixed-width type; `pow(5, 13)` already
    /// exceeds 32-bit range.
    pub fn pow(base: &BigInt, exponent: &BigInt) -> Result<BigInt, MathError> {
        if exponent.is_negative() {
            return Err(MathError::NegativeExponent {
                exponent: exponent.clone(),
            });
        }

        let mut result = BigInt::one();
        let mut base = base.clone();
        let mut exponent = exponent.clone();
        while exponent.is_positive() {
            if exponent.is_odd() {
                result *= &base;
            }
            base = &base * &base;
            exponent >>= 1;
        }
        Ok(result)
    }

    /// Binary exponentiation reduced modulo `modulus` after every multiply.
    ///
    /// Uses floored reduction, so the result always satisfies
    /// `0 <= result < modulus` even for negative bases.
    pub fn pow_mod(base: &BigInt, exponent: &BigInt, modulus: &BigInt) -> Result<BigInt, MathError> {
        if exponent.is_negative() {
            return Err(MathError::NegativeExponent {
                exponent: exponent.clone(),
            });
        }
        if !modulus.is_positive() {
            return Err(MathError::NonPositiveModulus {
                modulus: modulus.clone(),
            });
        }
        Ok(Self::pow_mod_unchecked(base, exponent, modulus))
    }

    /// Caller guarantees a non-negative exponent and a positive modulus.
    pub(crate) fn pow_mod_unchecked(base: &BigInt, exponent: &BigInt, modulus: &BigInt) -> BigInt {
        // 1 mod m, so a modulus of one yields zero for every exponent.
        let mut result = BigInt::one().mod_floor(modulus);
        let mut base = base.mod_floor(modulus);
        let mut exponent = exponent.clone();
        while exponent.is_positive() {
            if exponent.is_odd() {
                result = (&result * &base).mod_floor(modulus);
            }
            base = (&base * &base).mod_floor(modulus);
            exponent >>= 1;
        }
        result
    }
}
