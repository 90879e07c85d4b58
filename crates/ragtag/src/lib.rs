//! ragtag: document-grounded question answering over an in-memory chunk store
//!
//! The crate splits into two halves. The store side ingests plain-text
//! documents, slices them into retrieval-sized chunks at sentence boundaries,
//! and keeps a flattened chunk index in step with the documents. The answer
//! side scores chunks against a question, assembles a source-tagged prompt,
//! and carries it to a generation backend, degrading to fixed guidance
//! replies whenever there is nothing to ground an answer in.

pub mod assembler;
pub mod config;
pub mod error;
pub mod generation;
pub mod ingestion;
pub mod providers;
pub mod retrieval;
pub mod store;
pub mod types;

pub use assembler::Assembler;
pub use config::RagConfig;
pub use error::{Error, Result};
pub use generation::PromptTemplate;
pub use providers::{GeminiClient, TextGenerator};
pub use retrieval::{LexicalOverlap, Retriever, ScoredChunk, ScoringStrategy};
pub use store::ChunkStore;
pub use types::{Chunk, Document, DocumentSummary, QaOutcome, QaResponse};
