// src/integer_math/gcd.rs

use num::BigInt;
use num::Signed;
use num::Zero;

pub struct GCD;

impl GCD {
    pub fn find_lcm(numbers: &[BigInt]) -> BigInt {
        numbers.iter().fold(BigInt::from(1), |acc, x| Self::find_lcm_pair(&acc, x))
    }

    pub fn find_lcm_pair(left: &BigInt, right: &BigInt) -> BigInt {
        let abs_value1 = left.abs();
        let abs_value2 = right.abs();
        let gcd = Self::find_gcd_pair(&abs_value1, &abs_value2);
        // gcd(0, 0) = 0; lcm(0, 0) is 0 by convention, not a division by zero
        if gcd.is_zero() {
            return BigInt::from(0);
        }
        &(&abs_value1 * &abs_value2) / gcd
    }

    pub fn find_gcd(numbers: &[BigInt]) -> BigInt {
        numbers.iter().fold(BigInt::from(0), |acc, x| Self::find_gcd_pair(&acc, x))
    }

    /// Iterative Euclidean algorithm: replace (a, b) with (b, a mod b)
    /// until b reaches zero, then a is the greatest common divisor.
    ///
    /// Operates on absolute values, so the result is always non-negative
    /// and negative inputs behave like their magnitudes.
    /// `find_gcd_pair(a, 0) = |a|`; `find_gcd_pair(0, 0) = 0`.
    pub fn find_gcd_pair(left: &BigInt, right: &BigInt) -> BigInt {
        let mut a = left.abs();
        let mut b = right.abs();
        while !b.is_zero() {
            let remainder = &a % &b;
            a = b;
            b = remainder;
        }
        a
    }

    pub fn are_coprime(numbers: &[BigInt]) -> bool {
        Self::find_gcd(numbers) == BigInt::from(1)
    }
}
