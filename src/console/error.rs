//! Console error types

use crate::hal::BusError;

/// Console error with code and message
///
/// Every variant is recoverable: the console prints it and waits for the
/// next line with the session untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConsoleError {
    /// E01: Unknown command
    #[error("unknown command")]
    UnknownCommand,
    /// E02: Numeral did not parse in its radix
    #[error("'{text}' is not a number")]
    NotANumber { text: String },
    /// E03: Missing required argument
    #[error("missing argument")]
    MissingArg,
    /// E04: Value does not fit in a byte
    #[error("'{text}' is out of range (0-255)")]
    OutOfRange { text: String },
    /// E05: Read or write with extra tokens
    #[error("too many arguments")]
    TooManyArgs,
    /// E06: Display mode tag not in h/b/d/t/o
    #[error("'{token}' is not a valid output form (h, b, d, t, o)")]
    InvalidDisplayMode { token: String },
    /// E07: Transaction issued before `to <addr>`
    #[error("no device address set, use 'to <addr>'")]
    NoDevice,
    /// E08: Bus open, transfer or scan failure
    #[error(transparent)]
    Transport(#[from] BusError),
}

impl ConsoleError {
    /// Get error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownCommand => "E01",
            Self::NotANumber { .. } => "E02",
            Self::MissingArg => "E03",
            Self::OutOfRange { .. } => "E04",
            Self::TooManyArgs => "E05",
            Self::InvalidDisplayMode { .. } => "E06",
            Self::NoDevice => "E07",
            Self::Transport(_) => "E08",
        }
    }

    pub(crate) fn not_a_number(text: &str) -> Self {
        Self::NotANumber { text: text.to_string() }
    }

    pub(crate) fn out_of_range(text: &str) -> Self {
        Self::OutOfRange { text: text.to_string() }
    }
}
