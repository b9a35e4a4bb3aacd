//! error types for unimplemented capability slots

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// a slot nobody configured was called
    #[error("unimplemented: {operation} invoked at {file}:{line}:{column}")]
    UnconfiguredOperationInvoked {
        operation: &'static str,
        file: &'static str,
        line: u32,
        column: u32,
    },

    /// a constructor kept only so old call sites compile
    #[error("{constructor} is no longer supported, build a failing client and override its slots")]
    LegacyConstructorUnsupported { constructor: &'static str },
}

impl Error {
    /// operation label for unconfigured-invocation failures
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            Error::UnconfiguredOperationInvoked { operation, .. } => Some(*operation),
            Error::LegacyConstructorUnsupported { .. } => None,
        }
    }

    pub(crate) fn unconfigured(
        operation: &'static str,
        caller: &'static std::panic::Location<'static>,
    ) -> Self {
        Error::UnconfiguredOperationInvoked {
            operation,
            file: caller.file(),
            line: caller.line(),
            column: caller.column(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
