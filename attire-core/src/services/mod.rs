// File: attire-core/src/services/mod.rs
pub mod shop;
pub mod sizing;
pub mod tryon;
