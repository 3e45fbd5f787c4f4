//! Result and Error types for the GENDF module

use crate::archive::Layout;

/// Type alias for `Result<T, gendf::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for `xstools-gendf`
///
/// Every variant is fatal for a conversion. Array shapes in the archive are
/// fixed from counts read earlier in the file, so nothing is skipped or
/// recovered once a record is found to be bad.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// Tokenizer and logical record errors (malformed fields, short reads)
    #[error(transparent)]
    Endf(#[from] xstools_endf::Error),

    /// Failure to serialise to a JSON string
    #[error("failed serde JSON operation")]
    Json(#[from] serde_json::Error),

    /// Header trailer columns do not sum to zero
    #[error("header checksum columns sum to {sum} (line {line})")]
    HeaderChecksumMismatch { line: usize, sum: i64 },

    /// Counts, word lengths or slices inconsistent with the declared sizes
    #[error("invalid section geometry: {0}")]
    InvalidSectionGeometry(String),

    /// Blank column where a value is required
    #[error("missing value for {name} (line {line})")]
    MissingValue { name: String, line: usize },

    /// Section of a file type that has no table layout
    #[error("file type MF{0} is not supported")]
    UnsupportedFileType(u32),

    /// Archive group or dataset created twice
    #[error("archive node \"{0}\" already exists")]
    NodeExists(String),

    /// Archive group or dataset does not exist
    #[error("archive node \"{0}\" not found")]
    NodeNotFound(String),

    /// Write outside of a fixed size dataset
    #[error("index {index} out of bounds for \"{path}\" (length {len})")]
    IndexOutOfBounds {
        path: String,
        index: isize,
        len: usize,
    },

    /// Record written to a dataset of another layout
    #[error("layout mismatch for \"{path}\" (expected {expected:?}, found {found:?})")]
    LayoutMismatch {
        path: String,
        expected: Layout,
        found: Layout,
    },
}
