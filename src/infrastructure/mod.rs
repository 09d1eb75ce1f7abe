// src/infrastructure/mod.rs
pub mod snapshot;
