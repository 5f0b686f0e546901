use thiserror::Error;

/// The error type shared by all slicekit operations.
///
/// Every variant represents a precondition violation: an index or range that
/// falls outside what the target sequence can satisfy. "Not found" outcomes
/// are never expressed through this type.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn index_out_of_bounds(index: usize, len: usize) -> Error {
        Error(ErrorKind::IndexOutOfBounds { index, len }.into())
    }

    pub fn invalid_range(begin: usize, end: usize, len: usize) -> Error {
        Error(ErrorKind::InvalidRange { begin, end, len }.into())
    }

    pub fn empty_sequence(operation: impl Into<String>) -> Error {
        Error(
            ErrorKind::EmptySequence {
                operation: operation.into(),
            }
            .into(),
        )
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("index {index} is out of bounds for a sequence of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("range {begin}..{end} is invalid for a sequence of length {len}")]
    InvalidRange {
        begin: usize,
        end: usize,
        len: usize,
    },

    #[error("cannot {operation} an empty sequence")]
    EmptySequence { operation: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
