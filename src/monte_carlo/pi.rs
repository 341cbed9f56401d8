// src/monte_carlo/pi.rs

use log::debug;
use crate::core::error::MathError;
use crate::core::static_random::RandomSource;

pub struct MonteCarloPi;

impl MonteCarloPi {
    /// Estimates pi by sampling `num_samples` points uniformly from the unit
    /// square and counting those that land inside the unit quarter-circle.
    ///
    /// The estimate converges to pi as `num_samples` grows; a single run
    /// only carries the statistical guarantee of the law of large numbers.
    /// Injecting a seeded [`RandomSource`] makes a run reproducible.
    pub fn estimate(num_samples: u64, source: &mut dyn RandomSource) -> Result<f64, MathError> {
        if num_samples == 0 {
            return Err(MathError::ZeroSampleCount);
        }

        let mut hits: u64 = 0;
        for _ in 0..num_samples {
            let x = source.next_double();
            let y = source.next_double();
            if x * x + y * y <= 1.0 {
                hits += 1;
            }
        }

        debug!("{} of {} samples landed inside the quarter-circle", hits, num_samples);
        Ok(4.0 * hits as f64 / num_samples as f64)
    }
}
