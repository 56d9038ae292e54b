//! GA4Q Engine - Tool orchestration layer
//!
//! Coordinates the core normaliser, filter compiler and flattener with the
//! property directory and report backend collaborators, and exposes every
//! tool through a single `apply_tool_query` entry point.

pub mod commands;
pub mod errors;
