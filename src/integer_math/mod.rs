// src/integer_math/mod.rs

pub mod gcd;
pub mod mod_pow;
pub mod primality;
pub mod prime_sieve;
