// src/lib.rs

pub mod core;
pub mod integer_math;
pub mod monte_carlo;
