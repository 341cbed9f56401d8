// tests/primality_tests.rs
//
// Tests for the Miller-Rabin probable-prime test, including agreement with
// the sieve over a shared range.

use num::BigInt;

#[cfg(test)]
mod primality_tests {
    use super::*;
    use numkit::integer_math::primality::Primality;
    use numkit::integer_math::prime_sieve::PrimeSieve;

    #[test]
    fn test_small_cases() {
        assert!(Primality::is_probable_prime(&BigInt::from(2)));
        assert!(Primality::is_probable_prime(&BigInt::from(3)));
        assert!(!Primality::is_probable_prime(&BigInt::from(0)));
        assert!(!Primality::is_probable_prime(&BigInt::from(1)));
        assert!(!Primality::is_probable_prime(&BigInt::from(-7)));
        assert!(!Primality::is_probable_prime(&BigInt::from(9)));
    }

    #[test]
    fn test_witness_bases_are_reported_prime() {
        // REGRESSION TEST: a witness equal to the input powers to zero,
        // which is neither 1 nor input - 1. Every base in the witness set
        // is itself prime and must not be condemned by its own residue.
        for p in [2i64, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47] {
            assert!(
                Primality::is_probable_prime(&BigInt::from(p)),
                "{} wrongly reported composite",
                p
            );
        }
    }

    #[test]
    fn test_carmichael_numbers_are_composite() {
        // Fermat pseudoprimes to many bases; Miller-Rabin must reject them
        for n in [561i64, 1105, 1729, 2465, 2821, 6601] {
            assert!(!Primality::is_probable_prime(&BigInt::from(n)), "{} is composite", n);
        }
    }

    #[test]
    fn test_large_known_prime_and_neighbor() {
        // 2^31 - 1 is a Mersenne prime
        assert!(Primality::is_probable_prime(&BigInt::from(2_147_483_647i64)));
        assert!(!Primality::is_probable_prime(&BigInt::from(2_147_483_645i64)));
    }

    #[test]
    fn test_agrees_with_sieve_up_to_2000() {
        let primes = PrimeSieve::primes_up_to(2000);
        for n in 0i64..=2000 {
            let sieved = primes.contains(&(n as u64));
            assert_eq!(
                Primality::is_probable_prime(&BigInt::from(n)),
                sieved,
                "disagreement at {}",
                n
            );
        }
    }
}
