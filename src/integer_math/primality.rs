// src/integer_math/primality.rs

use num::{BigInt, Integer, One};
use crate::integer_math::mod_pow::ModPow;

pub struct Primality;

impl Primality {
    const PRIME_CHECK_BASES: [i64; 15] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];

    /// Miller-Rabin over a fixed set of witness bases. Deterministic for
    /// every input below 3.3 * 10^24, which covers this crate's range.
    /// Inputs below 2 and even inputs other than 2 are composite by
    /// definition, not errors.
    pub fn is_probable_prime(input: &BigInt) -> bool {
        if input == &BigInt::from(2) || input == &BigInt::from(3) {
            return true;
        }
        if input < &BigInt::from(2) || input.is_even() {
            return false;
        }

        // Write input - 1 as d * 2^s with d odd.
        let minus_one = input - BigInt::one();
        let mut d = minus_one.clone();
        let mut s = 0;
        while d.is_even() {
            d >>= 1;
            s += 1;
        }

        for &a in &Self::PRIME_CHECK_BASES {
            let witness = BigInt::from(a);
            // A witness that is a multiple of the input powers to zero and
            // would wrongly condemn the small primes in the base set.
            if &witness >= input {
                continue;
            }
            let mut x = ModPow::pow_mod_unchecked(&witness, &d, input);
            if x.is_one() || x == minus_one {
                continue;
            }
            let mut r = 1;
            while r < s {
                x = ModPow::pow_mod_unchecked(&x, &BigInt::from(2), input);
                if x.is_one() {
                    return false;
                }
                if x == minus_one {
                    break;
                }
                r += 1;
            }
            if x != minus_one {
                return false;
            }
        }
        true
    }
}
