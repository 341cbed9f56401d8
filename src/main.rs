// src/main.rs

use env_logger::Env;
use num::BigInt;
use numkit::core::error::MathError;
use numkit::core::static_random::StaticRandom;
use numkit::integer_math::gcd::GCD;
use numkit::integer_math::mod_pow::ModPow;
use numkit::integer_math::prime_sieve::PrimeSieve;
use numkit::monte_carlo::pi::MonteCarloPi;

fn main() -> Result<(), MathError> {
    // Initialize the logger
    let env = Env::default()
        .filter_or("NUMKIT_LOG_LEVEL", "info")
        .write_style_or("NUMKIT_LOG_STYLE", "always");
    env_logger::Builder::from_env(env).init();

    println!("gcd(48, 18) = {}", GCD::find_gcd_pair(&BigInt::from(48), &BigInt::from(18)));
    println!("gcd(101, 103) = {}", GCD::find_gcd_pair(&BigInt::from(101), &BigInt::from(103)));

    println!("2^10 = {}", ModPow::pow(&BigInt::from(2), &BigInt::from(10))?);
    println!("5^13 = {}", ModPow::pow(&BigInt::from(5), &BigInt::from(13))?);
    println!(
        "3^5 mod 7 = {}",
        ModPow::pow_mod(&BigInt::from(3), &BigInt::from(5), &BigInt::from(7))?
    );

    println!("primes up to 30: {:?}", PrimeSieve::primes_up_to(30));
    println!("primes up to 100: {:?}", PrimeSieve::primes_up_to(100));

    let mut source = StaticRandom::from_seed(42);
    println!(
        "pi ~ {:.6} (100000 samples)",
        MonteCarloPi::estimate(100_000, &mut source)?
    );
    println!(
        "pi ~ {:.6} (10000000 samples)",
        MonteCarloPi::estimate(10_000_000, &mut source)?
    );

    Ok(())
}
