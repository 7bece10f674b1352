//! Shared utilities for the gantry install manager.
//!
//! This crate provides the cross-cutting concerns used by the other gantry
//! crates: the unified error type and terminal status-line helpers.

pub mod errors;
pub mod progress;
