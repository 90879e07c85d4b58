//! Generation backends

mod gemini;
mod llm;

pub use gemini::GeminiClient;
pub use llm::TextGenerator;
