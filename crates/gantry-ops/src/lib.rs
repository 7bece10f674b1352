//! Operations layer for gantry.
//!
//! Parses the textual command language (`DEPEND`, `INSTALL`, `REMOVE`,
//! `LIST`, `TREE`, `USES`, `END`) and executes parsed commands against a
//! [`gantry_core::ComponentGraph`], rendering each typed outcome as report
//! lines on a caller-supplied writer.

pub mod command;
pub mod session;

pub use command::{Command, ParseError};
pub use session::Session;
