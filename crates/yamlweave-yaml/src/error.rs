//! Error types for the YAML boundary.

use thiserror::Error;

/// Result type alias for yamlweave-yaml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing text into a [`crate::YamlValue`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The scanner rejected the text.
    ///
    /// `message` is the parser's diagnostic verbatim; `line` and `col` are
    /// 1-based and refer to the text handed to this crate, which for the
    /// splicing core is generated intermediate text rather than anything the
    /// user wrote.
    #[error("{message}")]
    Parse {
        message: String,
        line: usize,
        col: usize,
    },

    /// The input contained no YAML document at all.
    #[error("no YAML document found")]
    EmptyDocument,

    /// A mapping used a key kind this tree cannot carry.
    #[error("unsupported mapping key: {kind}")]
    UnsupportedKey { kind: &'static str },

    /// The parser produced a node it could not resolve.
    #[error("malformed YAML structure")]
    InvalidStructure,
}

impl From<yaml_rust2::ScanError> for Error {
    fn from(err: yaml_rust2::ScanError) -> Self {
        let marker = *err.marker();
        Error::Parse {
            message: err.to_string(),
            // yaml-rust2 markers are 0-based, we report 1-based
            line: marker.line() + 1,
            col: marker.col() + 1,
        }
    }
}
