// src/lib.rs

pub mod catalog;
pub mod config;
pub mod services;
pub mod store;

pub use attire_common::Error;
pub use config::AppConfig;
pub use store::ClientStore;
