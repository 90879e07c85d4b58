//! Ranking the chunk index against a query

use std::sync::Arc;

use crate::config::RetrievalConfig;
use crate::error::{Error, Result};
use crate::store::ChunkStore;
use crate::types::Chunk;

use super::{LexicalOverlap, ScoringStrategy};

/// A chunk that survived ranking, with the score that put it there
#[derive(Debug, Clone)]
pub struct ScoredChunk {
    /// The retrieved chunk
    pub chunk: Chunk,
    /// Relevance score from the active strategy
    pub score: f32,
}

impl ScoredChunk {
    /// Render the chunk with its citation tag
    pub fn tagged(&self) -> String {
        self.chunk.tagged()
    }
}

/// Ranks a store's chunk index against queries through a pluggable
/// scoring strategy.
pub struct Retriever {
    strategy: Arc<dyn ScoringStrategy>,
    top_k: usize,
}

impl Retriever {
    /// Create a retriever over the given strategy
    pub fn new(strategy: Arc<dyn ScoringStrategy>, config: &RetrievalConfig) -> Self {
        Self {
            strategy,
            top_k: config.top_k,
        }
    }

    /// Word-overlap retriever, the shipped default
    pub fn lexical(config: &RetrievalConfig) -> Self {
        Self::new(Arc::new(LexicalOverlap), config)
    }

    /// Name of the active strategy
    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    /// Rank every indexed chunk against the query and keep the best.
    ///
    /// The sort is stable and descending, so equal scores keep their
    /// chunk index order and the earliest-ingested of two near-duplicate
    /// chunks surfaces first. The first `top_k` survive the cut, minus
    /// any at or below the strategy's relevance floor. An empty store
    /// short-circuits without consulting the strategy.
    pub async fn find_relevant(&self, store: &ChunkStore, query: &str) -> Result<Vec<ScoredChunk>> {
        let chunks = store.chunks();
        if chunks.is_empty() {
            return Ok(Vec::new());
        }

        let scores = self.strategy.score(query, chunks).await?;
        if scores.len() != chunks.len() {
            return Err(Error::retrieval(format!(
                "strategy '{}' returned {} scores for {} chunks",
                self.strategy.name(),
                scores.len(),
                chunks.len()
            )));
        }

        let mut scored: Vec<ScoredChunk> = chunks
            .iter()
            .zip(scores)
            .map(|(chunk, score)| ScoredChunk {
                chunk: chunk.clone(),
                score,
            })
            .collect();

        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(self.top_k);
        let floor = self.strategy.relevance_floor();
        scored.retain(|s| s.score > floor);

        tracing::debug!(
            "Retrieved {} chunks for query ({} strategy)",
            scored.len(),
            self.strategy.name()
        );
        Ok(scored)
    }
}
