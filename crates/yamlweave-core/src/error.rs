//! Error types for template expansion.

use thiserror::Error;

/// Result type alias for yamlweave-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while expanding a template occurrence.
///
/// There is no partial success: any of these aborts the occurrence with
/// nothing emitted, and none of them corrupts other occurrences handled by
/// the same allocator.
#[derive(Debug, Error)]
pub enum Error {
    /// The template's segments cannot bracket its expression slots.
    ///
    /// A well-formed template has exactly one more literal segment than it
    /// has expression slots.
    #[error(
        "malformed template: {segments} literal segment(s) cannot bracket {expressions} expression slot(s)"
    )]
    TemplateShape { segments: usize, expressions: usize },

    /// The host found a template occurrence somewhere this mechanism cannot
    /// expand. Raised by host integrations, not by the core itself.
    #[error("template occurrence in unsupported position: {context}")]
    Misuse { context: String },

    /// The linearized text was rejected by the YAML parser.
    ///
    /// The underlying diagnostic is preserved verbatim; its line and column
    /// refer to the generated intermediate text, not the user's template.
    #[error("generated YAML failed to parse: {0}")]
    ForeignFormat(#[from] yamlweave_yaml::Error),

    /// The placeholder counter space ran out. An implementation limit, not
    /// a user error.
    #[error("placeholder allocator exhausted its counter space")]
    AllocatorExhausted,

    /// Linearization and reconstruction disagreed about string bracketing.
    /// Always a bug in this crate, never a property of the input.
    #[error(
        "interpolation invariant violated: {fragments} fragment(s) for {expressions} expression(s)"
    )]
    InvariantViolation { fragments: usize, expressions: usize },
}
