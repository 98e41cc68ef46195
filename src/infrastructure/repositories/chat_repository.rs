use async_trait::async_trait;

/// Repository for chat completion calls.
/// Abstracts the underlying LLM provider behind a single-turn contract:
/// one system message, one user message, one text completion back.
///
/// Implementations own provider-specific concerns (endpoint, model name,
/// temperature). Callers own shape validation of the returned text; the
/// model is non-deterministic, so only shape can be enforced.
#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// Run one chat completion and return the raw completion text.
    ///
    /// # Errors
    /// Returns error if the call fails or the provider returns no content.
    async fn complete(&self, system: &str, user: &str) -> Result<String, String>;
}
