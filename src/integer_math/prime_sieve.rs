// src/integer_math/prime_sieve.rs

use bitvec::prelude::*;
use log::debug;

pub struct PrimeSieve;

impl PrimeSieve {
    /// Sieve of Eratosthenes: returns every prime in `[2, n]` in increasing
    /// order. Bounds below 2, including negative ones, yield no primes.
    ///
    /// O(n log log n) time, one bit per candidate of auxiliary space.
    pub fn primes_up_to(n: i64) -> Vec<u64> {
        if n < 2 {
            return vec![];
        }
        let n = n as usize;

        // Bit i stays set while i is still possibly prime.
        let mut table = bitvec![1; n + 1];
        table.set(0, false);
        table.set(1, false);

        let mut p = 2;
        while p * p <= n {
            if table[p] {
                // Multiples below p*p were already culled by smaller factors.
                let mut multiple = p * p;
                while multiple <= n {
                    table.set(multiple, false);
                    multiple += p;
                }
            }
            p += 1;
        }

        let primes: Vec<u64> = table.iter_ones().map(|i| i as u64).collect();
        debug!("sieve up to {} produced {} primes", n, primes.len());
        primes
    }
}
