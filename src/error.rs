//! Crate-wide error types.

use std::fmt;

pub type ClaimsResult<T> = Result<T, ClaimsError>;

// Hand-written `Display`/`Error` impls instead of `thiserror::Error`: the
// `source` fields below name the offending upload, not an underlying error,
// and the derive unconditionally treats a field named `source` as the error
// cause (which `String` cannot be).
#[derive(Debug)]
pub enum ClaimsError {
    InvalidArgument(String),

    SchemaMismatch {
        /// Position of the offending report in the upload sequence (0-based).
        index: usize,
        source: String,
        expected: Vec<String>,
        found: Vec<String>,
    },

    ColumnNotFound {
        columns: Vec<String>,
        aliases: &'static [&'static str],
    },

    Ingestion { source: String, reason: String },

    Export(String),
}

impl fmt::Display for ClaimsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            Self::SchemaMismatch {
                index,
                source,
                expected,
                found,
            } => write!(
                f,
                "report '{source}' (position {index}) does not match the first report's columns: \
                 expected {expected:?}, found {found:?}"
            ),
            Self::ColumnNotFound { columns, aliases } => write!(
                f,
                "no insurer column among {columns:?}; recognized names are {aliases:?}"
            ),
            Self::Ingestion { source, reason } => {
                write!(f, "failed to read report '{source}': {reason}")
            }
            Self::Export(msg) => write!(f, "failed to serialize workbook: {msg}"),
        }
    }
}

impl std::error::Error for ClaimsError {}
