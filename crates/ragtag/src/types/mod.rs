//! Core types for the question answering pipeline

pub mod document;
pub mod response;

pub use document::{Chunk, Document, DocumentSummary};
pub use response::{QaOutcome, QaResponse, NO_DOCUMENTS_MESSAGE, NO_RELEVANT_CHUNKS_MESSAGE};
