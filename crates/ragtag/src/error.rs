//! Error types for the question answering pipeline

use thiserror::Error;

/// Result type alias for ragtag operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the store, retrieval, and generation layers.
///
/// Generation and retrieval failures never escape [`Assembler::answer`];
/// they are folded into a degraded user-facing answer at that boundary.
///
/// [`Assembler::answer`]: crate::Assembler::answer
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Ingested document with no usable text after trimming
    #[error("Document '{title}' contains no text to index")]
    EmptyDocument { title: String },

    /// Document not found
    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    /// Scoring strategy failure
    #[error("Retrieval error: {0}")]
    Retrieval(String),

    /// Generation service failure
    #[error("Generation error: {0}")]
    Generation(String),
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an empty document error
    pub fn empty_document(title: impl Into<String>) -> Self {
        Self::EmptyDocument {
            title: title.into(),
        }
    }

    /// Create a retrieval error
    pub fn retrieval(message: impl Into<String>) -> Self {
        Self::Retrieval(message.into())
    }

    /// Create a generation error
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation(message.into())
    }
}
