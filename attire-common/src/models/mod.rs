// File: attire-common/src/models/mod.rs
pub mod catalog;
pub mod community;
pub mod sizing;
pub mod tryon;
pub mod user;

pub use catalog::{ClothingCategory, ClothingItem, Region, Size};
pub use community::{FashionPost, NewFashionPost};
pub use sizing::{Gender, MeasurementRange, Measurements, SizeBand};
pub use tryon::TryOnSession;
pub use user::User;
