// src/core.rs
pub mod plot;
pub mod scanner;
