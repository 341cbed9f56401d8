// src/monte_carlo/mod.rs

pub mod pi;
