//! Response types for answer requests

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Fixed reply when the store holds no documents at all.
pub const NO_DOCUMENTS_MESSAGE: &str = "I don't have any documents loaded yet. \
    Please upload some documents first, and I'll be happy to help you analyze them!";

/// Fixed reply when no chunk shares a single token with the question.
pub const NO_RELEVANT_CHUNKS_MESSAGE: &str = "I couldn't find specific information \
    about that in the documents you've provided. However, I can help you with general \
    questions or suggest what kind of information might be useful to look for. Could \
    you rephrase your question or let me know what specific aspect you'd like to explore?";

/// Terminal outcome of an answer request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QaOutcome {
    /// The generation service produced a grounded answer
    Answered,
    /// The store held no documents; generation was never attempted
    NoDocuments,
    /// Retrieval surfaced nothing relevant; generation was never attempted
    NoRelevantChunks,
    /// The generation call failed and the reply degraded to an apology
    GenerationFailed,
}

/// Reply to a question, with the outcome that produced it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaResponse {
    /// User-facing answer text
    pub answer: String,
    /// Which terminal state produced the answer
    pub outcome: QaOutcome,
    /// Titles of the documents the answer drew from, deduplicated,
    /// in retrieval-rank order; empty unless `outcome` is `Answered`
    pub sources: Vec<String>,
}

impl QaResponse {
    /// Reply built from generated text and the titles it was grounded in
    pub fn answered(answer: impl Into<String>, sources: Vec<String>) -> Self {
        Self {
            answer: answer.into(),
            outcome: QaOutcome::Answered,
            sources,
        }
    }

    /// Fixed reply for an empty store
    pub fn no_documents() -> Self {
        Self {
            answer: NO_DOCUMENTS_MESSAGE.to_string(),
            outcome: QaOutcome::NoDocuments,
            sources: Vec::new(),
        }
    }

    /// Fixed reply when retrieval comes back empty
    pub fn no_relevant_chunks() -> Self {
        Self {
            answer: NO_RELEVANT_CHUNKS_MESSAGE.to_string(),
            outcome: QaOutcome::NoRelevantChunks,
            sources: Vec::new(),
        }
    }

    /// Apologetic reply wrapping a pipeline failure.
    ///
    /// The error text is embedded so the user sees what went wrong, but
    /// the error itself stops here.
    pub fn degraded(error: &Error) -> Self {
        Self {
            answer: format!(
                "I apologize, but I encountered an error while processing your \
                 question: {}. Please try rephrasing your question or let me know \
                 if you need help with something else.",
                error
            ),
            outcome: QaOutcome::GenerationFailed,
            sources: Vec::new(),
        }
    }

    /// True when the reply came from the generation service
    pub fn is_answered(&self) -> bool {
        self.outcome == QaOutcome::Answered
    }
}
