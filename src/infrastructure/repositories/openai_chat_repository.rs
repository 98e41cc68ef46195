use super::chat_repository::ChatRepository;
use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;

/// Sampling temperature for both recommendation and dialogue generation.
const TEMPERATURE: f32 = 0.7;

/// OpenAI-compatible implementation of the chat repository.
///
/// Works against any endpoint speaking the OpenAI chat completions protocol
/// (the default configuration points it at Gemini's compatibility layer).
pub struct OpenAiChatRepository {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiChatRepository {
    pub fn new(api_key: String, base_url: String, model: String) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(base_url.trim_end_matches('/'));

        Self {
            client: Client::with_config(config),
            model,
        }
    }
}

#[async_trait]
impl ChatRepository for OpenAiChatRepository {
    async fn complete(&self, system: &str, user: &str) -> Result<String, String> {
        let start_time = std::time::Instant::now();

        tracing::info!(
            model = %self.model,
            prompt_length = user.len(),
            "Calling chat completions API"
        );

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .temperature(TEMPERATURE)
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(system)
                    .build()
                    .map_err(|e| format!("failed to build system message: {e}"))?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(user)
                    .build()
                    .map_err(|e| format!("failed to build user message: {e}"))?
                    .into(),
            ])
            .build()
            .map_err(|e| format!("failed to build chat request: {e}"))?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            tracing::error!(
                error = %e,
                model = %self.model,
                "Chat completion call failed"
            );
            format!("chat completion failed: {e}")
        })?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| "chat completion returned no content".to_string())?;

        tracing::info!(
            model = %self.model,
            latency_ms = start_time.elapsed().as_millis(),
            completion_length = content.len(),
            "Chat completion received"
        );

        Ok(content)
    }
}
