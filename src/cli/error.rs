//! CLI-level errors (wraps application errors)

use std::io;

use thiserror::Error;

use crate::application::ApplicationError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Io { .. } => crate::exitcode::IOERR,
            CliError::Application(e) => match e {
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::Domain(_) => crate::exitcode::SOFTWARE,
            },
        }
    }
}

/// Extension trait for converting `io::Result` to `CliResult` with context.
pub trait IoResultExt<T> {
    /// # Example
    /// ```ignore
    /// output::menu(&mut out, &moves, keys).with_io_context("write menu")?;
    /// ```
    fn with_io_context(self, action: &str) -> CliResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_io_context(self, action: &str) -> CliResult<T> {
        self.map_err(|e| CliError::io(action, e))
    }
}
