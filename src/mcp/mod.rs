//! MCP server module
//!
//! Exposes the calorie form as MCP tools over stdio.

pub mod server;

pub use server::CaloriesService;
