//! Errors reported by the tool, and the exit status each one maps to.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop an invocation.
#[derive(Debug, Error)]
pub enum Error {
    /// The memory device could not be opened.
    #[error("failed to open `{}`: {source}", path.display())]
    Open { path: PathBuf, source: std::io::Error },
    /// The register window could not be mapped.
    #[error("mmap failed: {0}")]
    Map(std::io::Error),
    /// The configured window is smaller than the seven port blocks.
    #[error("register window of {0:#x} bytes does not cover all ports")]
    WindowTooSmall(usize),
    /// Malformed pin, e.g. `PH00` or `PA32`.
    #[error("Bad pin specification `{0}'")]
    BadPin(String),
    /// A pin was given without a command.
    #[error("no command specified")]
    NoCommand,
    /// The command keyword is not known.
    #[error("Bad command `{0}'")]
    UnknownCommand(String),
    /// The command needs a value and none was given.
    #[error("value not specified")]
    MissingValue,
    /// The value is not a decimal integer.
    #[error("Bad value `{0}'")]
    InvalidValue(String),
    /// Writing command output failed.
    #[error(transparent)]
    Output(#[from] std::io::Error),
}

impl Error {
    /// Process exit status reported for this error.
    ///
    /// An unknown command keeps the legacy status 0: the message is printed
    /// but the invocation is not treated as a failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnknownCommand(_) => 0,
            _ => 2,
        }
    }
}
