use std::error::Error as StdError;
use std::fmt::{self, Display};

/// Errors returned by [`ChatSession`](crate::ChatSession) operations.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Error {
    /// The message is empty or only whitespace.
    EmptyInput,
    /// The assistant is still playing back a response.
    Busy,
    /// No suggestion chip exists at this index.
    UnknownSuggestion(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "message is empty"),
            Error::Busy => write!(f, "assistant is still responding"),
            Error::UnknownSuggestion(idx) => {
                write!(f, "no suggestion at index {idx}")
            }
        }
    }
}

impl StdError for Error {}
