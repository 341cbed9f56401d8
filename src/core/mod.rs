// src/core/mod.rs

pub mod error;
pub mod static_random;
