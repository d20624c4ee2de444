//! # Shell Error Type
//!
//! Unified error type for the storefront shell.
//!
//! Most core errors never surface here: out-of-stock, empty-cart, and
//! invalid-selection conditions are translated into dialog messages inside
//! the shell, exactly as the storefront UI informs the user and moves on.
//! `ShellError` covers what actually aborts the program: broken terminal
//! I/O and startup failures (bad seed data, invalid session name).

use thiserror::Error;

use readnest_core::CoreError;

/// Errors that terminate the storefront.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Startup-time domain failure (seed validation, session creation).
    #[error("startup failed: {0}")]
    Core(#[from] CoreError),

    /// Terminal I/O failure.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with ShellError.
pub type ShellResult<T> = Result<T, ShellError>;
