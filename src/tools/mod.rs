//! nutricalc Tools module
//!
//! MCP tool implementations for the recipe nutrition calculator.

pub mod ingredients;
pub mod recipes;
pub mod status;
