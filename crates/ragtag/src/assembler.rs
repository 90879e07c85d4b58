//! Answer pipeline: retrieval, prompt assembly, generation

use std::sync::Arc;

use crate::config::RagConfig;
use crate::error::Result;
use crate::generation::PromptTemplate;
use crate::providers::{GeminiClient, TextGenerator};
use crate::retrieval::{Retriever, ScoredChunk};
use crate::store::ChunkStore;
use crate::types::QaResponse;

/// Turns a question and a chunk store into a user-facing reply.
///
/// Every stage resolves to a reply rather than an error: an empty store
/// and a no-match retrieval produce fixed guidance messages, and a failed
/// generation call produces an apology carrying the error text. Callers
/// always get a [`QaResponse`] they can show as-is.
pub struct Assembler {
    retriever: Retriever,
    template: PromptTemplate,
    generator: Arc<dyn TextGenerator>,
}

impl Assembler {
    /// Assemble a pipeline from explicit parts.
    pub fn new(
        retriever: Retriever,
        template: PromptTemplate,
        generator: Arc<dyn TextGenerator>,
    ) -> Self {
        Self {
            retriever,
            template,
            generator,
        }
    }

    /// Production wiring: lexical retrieval, the concise template, and a
    /// Gemini backend.
    ///
    /// This is the one constructor that needs a credential; it fails fast
    /// on a missing API key instead of deferring the surprise to the
    /// first question.
    pub fn from_config(config: &RagConfig) -> Result<Self> {
        let generator = GeminiClient::new(&config.llm)?;
        Ok(Self::new(
            Retriever::lexical(&config.retrieval),
            PromptTemplate::concise(),
            Arc::new(generator),
        ))
    }

    /// Answer a question against the current store contents.
    ///
    /// The reply's [`outcome`](crate::types::QaOutcome) records which path
    /// produced it. The generation backend is only invoked when at least
    /// one relevant chunk was found.
    pub async fn answer(&self, store: &ChunkStore, question: &str) -> QaResponse {
        if store.is_empty() {
            tracing::info!("No documents loaded, returning guidance reply");
            return QaResponse::no_documents();
        }

        let scored = match self.retriever.find_relevant(store, question).await {
            Ok(scored) => scored,
            Err(e) => {
                tracing::error!("Retrieval failed: {}", e);
                return QaResponse::degraded(&e);
            }
        };

        if scored.is_empty() {
            tracing::info!("No chunks matched the question, returning guidance reply");
            return QaResponse::no_relevant_chunks();
        }

        let context = PromptTemplate::build_context(&scored);
        let prompt = self.template.render(&context, question);
        let sources = source_titles(&scored);

        match self.generator.generate(&prompt).await {
            Ok(answer) => {
                tracing::info!(
                    "Answered from {} chunks across {} documents",
                    scored.len(),
                    sources.len()
                );
                QaResponse::answered(answer, sources)
            }
            Err(e) => {
                tracing::error!("Generation failed: {}", e);
                QaResponse::degraded(&e)
            }
        }
    }
}

/// Unique source titles in retrieval-rank order
fn source_titles(scored: &[ScoredChunk]) -> Vec<String> {
    let mut titles: Vec<String> = Vec::new();
    for entry in scored {
        if !titles.iter().any(|t| t == &entry.chunk.source_title) {
            titles.push(entry.chunk.source_title.clone());
        }
    }
    titles
}
