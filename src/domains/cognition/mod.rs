//! Cognition domain module.
//!
//! The capability provider behind every tool: result types, pure
//! analysis functions, and the (mocked) engine that produces them.
//!
//! ## Architecture
//!
//! - `types.rs` - result records and their wire-string enums
//! - `analysis.rs` - pure context-analysis functions
//! - `engine.rs` - the `CognitionEngine` provider, rng-injectable

pub mod analysis;
mod engine;
pub mod types;

pub use engine::{CognitionEngine, domain_capabilities};
