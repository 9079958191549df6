//! STL codec error types

use std::num::ParseFloatError;

/// Result alias used by every codec entry point
pub type Result<T> = std::result::Result<T, StlError>;

/// Errors produced while decoding or encoding STL data
#[derive(Debug, thiserror::Error)]
pub enum StlError {
    /// Input is smaller than the minimum size of the detected encoding
    #[error("file is too short: {len} bytes (need at least {min})")]
    TooShort { len: usize, min: usize },

    /// Binary body holds fewer bytes than the declared triangle count needs
    #[error(
        "unexpected end of file: want {required} bytes to read triangle data, but only {available} bytes are available"
    )]
    Truncated { required: u64, available: u64 },

    /// ASCII line does not start with any keyword accepted at this point
    #[error("[line={line}] expected line to start with one of {expected:?}, the actual line is: '{actual}'")]
    GrammarViolation {
        line: usize,
        expected: Vec<&'static str>,
        actual: String,
    },

    /// `facet normal` or `vertex` line without exactly three numbers
    #[error("[line={line}] {keyword} definition is broken: '{text}'")]
    FieldCount {
        line: usize,
        keyword: &'static str,
        text: String,
    },

    /// Numeric token is not a float, even with a comma decimal separator
    #[error("[line={line}] invalid number '{text}': {source}")]
    NumberFormat {
        line: usize,
        text: String,
        source: ParseFloatError,
    },

    /// Input ended inside the grammar
    #[error("[line={line}] unexpected end of file")]
    UnexpectedEnd { line: usize },

    /// `solid` and `endsolid` names differ (strict mode only)
    #[error("solid name '{start}' does not match endsolid name '{end}'")]
    SolidNameMismatch { start: String, end: String },

    /// Mesh does not fit the u32 triangle count of the binary encoding
    #[error("too many triangles for binary STL: {0} (max {max})", max = u32::MAX)]
    TooManyTriangles(usize),

    /// IO error from the underlying source or sink
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
