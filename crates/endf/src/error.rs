//! Result and Error types for the ENDF card layer

/// Type alias for `Result<T, endf::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for `xstools-endf`
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// Column text is not a valid number once normalised
    #[error("malformed numeric field \"{text}\" (line {line}, column {column})")]
    MalformedNumericField {
        line: usize,
        column: usize,
        text: String,
    },

    /// Stream ended before a record was complete
    #[error("stream ended after line {line} while {expected} more line(s) were required")]
    TruncatedStream { line: usize, expected: usize },
}

impl Error {
    /// Attach the physical line number to a tokenizer error
    pub(crate) fn at_line(self, n: usize) -> Self {
        match self {
            Error::MalformedNumericField { column, text, .. } => Error::MalformedNumericField {
                line: n,
                column,
                text,
            },
            other => other,
        }
    }
}
