//! Data models
//!
//! The values a calorie form collects and displays.

mod calorie;
mod gender;
mod intensity;
mod weight;

pub use calorie::{CalorieInputs, CalorieResult};
pub use gender::GenderCategory;
pub use intensity::IntensityLevel;
pub use weight::Weight;
