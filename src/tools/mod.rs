//! Tools module
//!
//! MCP tool implementations for the calorie form.

pub mod form;
pub mod status;

pub use form::{FormError, FormResult};
