use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all gantry operations.
///
/// Model-level failures (duplicate declarations, circular dependencies,
/// removing something still needed) are *not* errors: the core reports them
/// as typed outcomes and the session renders them. This type covers the hard
/// failures at the edges of the program, chiefly script I/O.
#[derive(Debug, Error, Diagnostic)]
pub enum GantryError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A command script could not be read.
    #[error("Script error: {message}")]
    #[diagnostic(help("Check that the script path exists and is readable"))]
    Script { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type GantryResult<T> = miette::Result<T>;
