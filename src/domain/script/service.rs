use async_trait::async_trait;
use std::sync::Arc;

use super::error::ScriptServiceError;
use super::model::DialogueScript;
use crate::domain::casting::Cast;
use crate::domain::content::Content;
use crate::domain::shared::llm_text::strip_code_fences;
use crate::infrastructure::repositories::ChatRepository;

const SYSTEM_PROMPT: &str = "You are a creative podcast script writer.";

/// Upper bound on exchange turns, requested via the prompt only. The model
/// usually honors it but nothing enforces it programmatically.
const MAX_TURNS: usize = 8;

pub struct ScriptService {
    chat_repo: Arc<dyn ChatRepository>,
}

impl ScriptService {
    pub fn new(chat_repo: Arc<dyn ChatRepository>) -> Self {
        Self { chat_repo }
    }
}

#[async_trait]
pub trait ScriptServiceApi: Send + Sync {
    /// Generate a two-speaker dialogue script discussing the content.
    ///
    /// One chat completion; the response must be a JSON array of
    /// `{speaker, line}` objects. A structural mismatch is fatal to the
    /// stage and carries the raw model output for diagnosis.
    async fn generate(
        &self,
        content: &Content,
        cast: &Cast,
    ) -> Result<DialogueScript, ScriptServiceError>;
}

#[async_trait]
impl ScriptServiceApi for ScriptService {
    async fn generate(
        &self,
        content: &Content,
        cast: &Cast,
    ) -> Result<DialogueScript, ScriptServiceError> {
        let prompt = build_generation_prompt(content, cast);

        tracing::info!(
            speaker_1 = %cast.speakers[0].name,
            speaker_2 = %cast.speakers[1].name,
            style = %cast.style,
            content_chars = content.char_count(),
            "Requesting dialogue generation"
        );

        let raw = self
            .chat_repo
            .complete(SYSTEM_PROMPT, &prompt)
            .await
            .map_err(ScriptServiceError::Dependency)?;

        let stripped = strip_code_fences(&raw);

        let script = DialogueScript::parse(stripped).map_err(|source| {
            ScriptServiceError::MalformedGeneration {
                source,
                raw: raw.clone(),
            }
        })?;

        tracing::info!(lines = script.len(), "Dialogue script generated");

        Ok(script)
    }
}

fn build_generation_prompt(content: &Content, cast: &Cast) -> String {
    let first = &cast.speakers[0].name;
    let second = &cast.speakers[1].name;

    format!(
        "Based on the content below, write an engaging podcast dialogue between \
         two characters, {first} and {second}. The conversation should explore \
         the content's themes and information in {style}, presented as dialogue. \
         At most {MAX_TURNS} exchange turns.\n\
         Output a JSON array where every object has a \"speaker\" key (value \
         \"{first}\" or \"{second}\") and a \"line\" key (what that character \
         says). Do not include any text or explanation outside the JSON array.\n\n\
         Content:\n---\n{content}\n---\n\n\
         JSON output:",
        style = cast.style.instruction(),
        content = content.text(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::casting::Cast;

    struct StaticChatRepository {
        response: Result<String, String>,
    }

    #[async_trait]
    impl ChatRepository for StaticChatRepository {
        async fn complete(&self, _system: &str, _user: &str) -> Result<String, String> {
            self.response.clone()
        }
    }

    fn service_with(response: Result<String, String>) -> ScriptService {
        ScriptService::new(Arc::new(StaticChatRepository { response }))
    }

    fn content() -> Content {
        Content::new("Rust provides memory safety without garbage collection.".to_string())
            .unwrap()
    }

    #[tokio::test]
    async fn test_fenced_json_response_parses() {
        let raw = "```json\n[\n  {\"speaker\": \"Alice\", \"line\": \"So, no garbage collector at all?\"},\n  {\"speaker\": \"Bob\", \"line\": \"None. The compiler does the bookkeeping.\"}\n]\n```";
        let service = service_with(Ok(raw.to_string()));

        let script = service
            .generate(&content(), &Cast::default_cast())
            .await
            .unwrap();

        assert_eq!(script.len(), 2);
        assert_eq!(script.lines()[0].speaker, "Alice");
        assert_eq!(script.lines()[1].speaker, "Bob");
    }

    #[tokio::test]
    async fn test_malformed_response_is_fatal_and_keeps_raw_text() {
        let raw = "Sure! Here is a script:\nAlice: hello";
        let service = service_with(Ok(raw.to_string()));

        let err = service
            .generate(&content(), &Cast::default_cast())
            .await
            .unwrap_err();

        match err {
            ScriptServiceError::MalformedGeneration { raw: kept, .. } => {
                assert_eq!(kept, raw);
            }
            other => panic!("expected MalformedGeneration, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_field_in_response_is_fatal() {
        let raw = r#"[{"speaker": "Alice"}]"#;
        let service = service_with(Ok(raw.to_string()));

        let err = service
            .generate(&content(), &Cast::default_cast())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ScriptServiceError::MalformedGeneration { .. }
        ));
    }

    #[tokio::test]
    async fn test_call_failure_is_a_dependency_error() {
        let service = service_with(Err("timeout".to_string()));
        let err = service
            .generate(&content(), &Cast::default_cast())
            .await
            .unwrap_err();
        assert!(matches!(err, ScriptServiceError::Dependency(_)));
    }

    #[test]
    fn test_prompt_embeds_names_style_and_content() {
        let cast = Cast::default_cast();
        let prompt = build_generation_prompt(&content(), &cast);
        assert!(prompt.contains("Alice"));
        assert!(prompt.contains("Bob"));
        assert!(prompt.contains(cast.style.instruction()));
        assert!(prompt.contains("memory safety"));
    }
}
