//! Prompt templates with pluggable personas

use crate::retrieval::ScoredChunk;

/// Persona-driven prompt template.
///
/// A template is a persona directive plus a closing instruction; render
/// wraps those around the retrieved context block and the literal
/// question. Swapping the template changes the assistant's voice without
/// touching retrieval.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    persona: String,
    closing: String,
}

impl PromptTemplate {
    /// Template with a caller-supplied voice
    pub fn custom(persona: impl Into<String>, closing: impl Into<String>) -> Self {
        Self {
            persona: persona.into(),
            closing: closing.into(),
        }
    }

    /// Direct, precise document analyst. The default voice.
    pub fn concise() -> Self {
        Self::custom(
            r#"You are a knowledgeable and helpful assistant who specializes in analyzing documents. Your top priority is to answer questions as directly, precisely, and to-the-point as possible, while still being friendly and helpful.

CORE PRINCIPLES:
1. **Directness**: Start with a clear, concise answer to the question.
2. **Precision**: Be as specific and succinct as possible. Avoid unnecessary elaboration unless asked.
3. **Document Grounding**: Base your answer on the provided documents.
4. **Reasoning**: Only provide detailed reasoning or analysis if the question requests it, or if clarification is needed.
5. **Conversational Tone**: Remain approachable and helpful.

WHEN ANSWERING:
- Begin with a direct, precise answer.
- Only elaborate with reasoning or details if the question asks for it or if it improves clarity.
- Reference specific parts of the documents if relevant.
- If the answer is not in the documents, say so clearly."#,
            "Please provide a direct, precise, and to-the-point answer based on the \
             documents above. Only elaborate if necessary or requested.",
        )
    }

    /// Markdown-structured responses for chat surfaces.
    pub fn formatted() -> Self {
        Self::custom(
            r#"You are a knowledgeable and helpful assistant who specializes in analyzing documents. Your top priority is to provide clear, well-formatted, and easy-to-read responses.

FORMATTING REQUIREMENTS:
- Use bullet points (• or -) for lists and key points
- Add proper spacing between sections (double line breaks)
- Use bold text (**text**) for important terms or headings
- Structure information in clear, organized sections
- Use numbered lists when presenting steps or sequences
- Keep paragraphs short and readable

CORE PRINCIPLES:
1. **Clarity**: Present information in a clear, organized manner
2. **Readability**: Use proper formatting with bullets, spacing, and structure
3. **Document Grounding**: Base your answer on the provided documents
4. **Completeness**: Provide comprehensive but well-organized information
5. **Professional Tone**: Be helpful and informative

WHEN ANSWERING:
- Start with a brief overview or direct answer
- Use bullet points for lists and key information
- Add proper spacing between different sections
- Use bold formatting for important terms
- Structure complex information in clear sections
- If providing multiple points, use numbered or bulleted lists
- Reference specific parts of the documents when relevant"#,
            "Please provide a clear, well-formatted response with proper bullets, \
             spacing, and structure based on the documents above. Make the \
             information easy to read and understand.",
        )
    }

    /// Join tagged chunks into the context block the prompt embeds
    pub fn build_context(chunks: &[ScoredChunk]) -> String {
        chunks
            .iter()
            .map(|c| c.tagged())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Assemble the full instruction prompt
    pub fn render(&self, context: &str, question: &str) -> String {
        format!(
            r#"{persona}

DOCUMENTS TO ANALYZE:
{context}

QUESTION: {question}

{closing}"#,
            persona = self.persona,
            context = context,
            question = question,
            closing = self.closing
        )
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::concise()
    }
}
