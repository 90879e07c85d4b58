//! Prompt assembly for grounded generation

mod prompt;

pub use prompt::PromptTemplate;
