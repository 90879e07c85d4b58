//! Document ingestion: splitting raw text into retrieval chunks

mod chunker;

pub use chunker::TextChunker;
