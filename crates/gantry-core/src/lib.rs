//! Core model for the gantry install manager.
//!
//! This crate owns the component dependency graph and the four operations
//! the rest of the tool is built on: declaring dependency edges, resolving
//! an install order, reference-counted install/remove, and listing the
//! installed set. Every operation returns a typed outcome; rendering those
//! outcomes as text is the session layer's job.
//!
//! This crate is intentionally free of I/O.

pub mod graph;
pub mod outcome;
pub mod view;

pub use graph::ComponentGraph;
pub use outcome::{
    DeclareOutcome, InstallReport, InstallStep, RemoveOutcome, Resolution,
};
