//! Document and chunk types with source tracking for citations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A chunk of text from a document
///
/// The unit of retrieval: a trimmed, non-empty span of the owning
/// document's content, keeping the title around so answers can cite
/// where their material came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    /// Text content
    pub text: String,
    /// Title of the owning document (lookup only, no ownership)
    pub source_title: String,
}

impl Chunk {
    /// Create a new chunk
    pub fn new(text: impl Into<String>, source_title: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_title: source_title.into(),
        }
    }

    /// Render the chunk with its citation tag, e.g. `[From: Handbook]`.
    pub fn tagged(&self) -> String {
        format!("[From: {}]\n{}", self.source_title, self.text)
    }
}

/// A document that has been ingested
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Title identifying the document; unique within a store
    pub title: String,
    /// Full text content
    pub content: String,
    /// Chunks derived from `content` at ingestion time.
    ///
    /// Recomputed whenever the content is replaced; never edited on
    /// their own.
    pub chunks: Vec<Chunk>,
    /// Ingestion timestamp
    pub added_at: DateTime<Utc>,
}

impl Document {
    /// Create a new document from its content and pre-split chunks
    pub fn new(title: impl Into<String>, content: impl Into<String>, chunks: Vec<Chunk>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            chunks,
            added_at: Utc::now(),
        }
    }

    /// Content length in characters
    pub fn content_chars(&self) -> usize {
        self.content.chars().count()
    }

    /// Read-only projection for listings
    pub fn summary(&self) -> DocumentSummary {
        DocumentSummary::from(self)
    }
}

/// Summary of an ingested document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// Document title
    pub title: String,
    /// Content length in characters
    pub content_chars: usize,
    /// Number of chunks created
    pub chunk_count: usize,
    /// Ingestion timestamp
    pub added_at: DateTime<Utc>,
}

impl From<&Document> for DocumentSummary {
    fn from(doc: &Document) -> Self {
        Self {
            title: doc.title.clone(),
            content_chars: doc.content_chars(),
            chunk_count: doc.chunks.len(),
            added_at: doc.added_at,
        }
    }
}
