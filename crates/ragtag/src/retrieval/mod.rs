//! Query-time retrieval over the chunk index

mod scoring;
mod search;

pub use scoring::{LexicalOverlap, ScoringStrategy};
pub use search::{Retriever, ScoredChunk};
