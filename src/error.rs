use std::io;
use std::num::ParseFloatError;
use thiserror::Error;

/// Errors produced by parsing and dividing complex numbers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComplexError {
    /// The text doesn't have the shape `a+bi`.
    #[error("invalid format '{input}', expected something like 3+4i")]
    Format { input: String },

    /// One of the two components isn't a number.
    #[error("invalid number '{part}': {source}")]
    InvalidNumber {
        part: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("attempted to divide by zero")]
    DivisionByZero,
}

impl ComplexError {
    /// True for errors caused by malformed input text.
    pub fn is_format(&self) -> bool {
        matches!(self, ComplexError::Format { .. } | ComplexError::InvalidNumber { .. })
    }
}

/// Errors which end a console session before both numbers have been read.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("input closed before a complex number was entered")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

//--------------------------------------------------------------------------------------------------
