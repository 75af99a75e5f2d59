//! Calories Library
//!
//! Calorie burn estimation and the single form session built around it.

pub mod estimator;
pub mod form;
pub mod mcp;
pub mod models;
pub mod tools;
