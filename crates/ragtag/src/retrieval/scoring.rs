//! Pluggable chunk scoring strategies

use std::collections::HashSet;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::Chunk;

/// Scores chunks against a query.
///
/// Implementations may call out to external services, which is why
/// scoring is async and fallible; the shipped lexical strategy is pure
/// and never fails.
#[async_trait]
pub trait ScoringStrategy: Send + Sync {
    /// Score every chunk against the query, one score per chunk, in
    /// chunk order.
    async fn score(&self, query: &str, chunks: &[Chunk]) -> Result<Vec<f32>>;

    /// Cutoff for this strategy: retrieval keeps only chunks scoring
    /// strictly above this floor. Word overlap uses 0.0; a
    /// similarity-based strategy would raise it (0.1 is conventional).
    fn relevance_floor(&self) -> f32 {
        0.0
    }

    /// Strategy name for logging
    fn name(&self) -> &str;
}

/// Bag-of-words overlap against the distinct query tokens.
///
/// A chunk's score is the count of distinct lowercased query tokens it
/// shares with the chunk's own token set, divided by the number of
/// distinct query tokens (an empty query scores everything 0). This is
/// a recall heuristic, not semantic search: paraphrases and synonyms
/// score zero, and ranking says nothing about meaning.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalOverlap;

impl LexicalOverlap {
    /// Whitespace tokens, lowercased and deduplicated. Punctuation is
    /// kept attached, so "mat." and "mat" are different tokens.
    fn tokens(text: &str) -> HashSet<String> {
        text.split_whitespace().map(str::to_lowercase).collect()
    }
}

#[async_trait]
impl ScoringStrategy for LexicalOverlap {
    async fn score(&self, query: &str, chunks: &[Chunk]) -> Result<Vec<f32>> {
        let query_tokens = Self::tokens(query);
        let scores = chunks
            .iter()
            .map(|chunk| {
                let chunk_tokens = Self::tokens(&chunk.text);
                let overlap = query_tokens.intersection(&chunk_tokens).count();
                overlap as f32 / query_tokens.len().max(1) as f32
            })
            .collect();
        Ok(scores)
    }

    fn name(&self) -> &str {
        "lexical-overlap"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(text: &str) -> Chunk {
        Chunk::new(text, "Doc")
    }

    #[tokio::test]
    async fn score_is_the_covered_fraction_of_query_tokens() {
        let chunks = vec![
            chunk("the cat sat"),
            chunk("the cat and the mat"),
            chunk("nothing related"),
        ];
        let scores = LexicalOverlap.score("cat mat", &chunks).await.unwrap();
        assert_eq!(scores, vec![0.5, 1.0, 0.0]);
    }

    #[tokio::test]
    async fn matching_is_case_insensitive_and_deduplicated() {
        let chunks = vec![chunk("The CAT naps")];
        // "cat" appears twice in the query but counts once
        let scores = LexicalOverlap.score("cat CAT naps", &chunks).await.unwrap();
        assert_eq!(scores, vec![1.0]);
    }

    #[tokio::test]
    async fn punctuation_stays_attached_to_tokens() {
        let chunks = vec![chunk("the mat.")];
        let scores = LexicalOverlap.score("mat", &chunks).await.unwrap();
        // "mat." is not the token "mat"
        assert_eq!(scores, vec![0.0]);
    }

    #[tokio::test]
    async fn empty_query_scores_zero_without_dividing_by_zero() {
        let chunks = vec![chunk("anything at all")];
        let scores = LexicalOverlap.score("", &chunks).await.unwrap();
        assert_eq!(scores, vec![0.0]);
    }
}
