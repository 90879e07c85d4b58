//! Text generation trait

use async_trait::async_trait;

use crate::error::Result;

/// A backend that turns a finished prompt into generated text.
///
/// The answer pipeline builds the full prompt itself; implementations only
/// carry it to a model and hand back the text. Keeping the seam this narrow
/// lets tests swap in canned generators and lets deployments switch services
/// without touching retrieval or prompt assembly.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for a single prompt.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Backend name, for logs.
    fn name(&self) -> &str;

    /// Model identifier in use, for logs.
    fn model(&self) -> &str;
}
