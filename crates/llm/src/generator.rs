//! The [`ContentGenerator`] seam between the API and a text model.

use async_trait::async_trait;
use lego_core::generation::{
    GeneratedContent, GenerationRequest, RewriteRequest, DEFAULT_TEMPERATURE, REWRITE_MAX_TOKENS,
    REWRITE_SYSTEM_PROMPT, TOP_P,
};
use lego_core::types::now;

use crate::api::{ChatCompletionApi, ChatMessage, LlmError, Sampling};

/// Produces generated or rewritten text. Requests arrive already validated.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedContent, LlmError>;

    async fn rewrite(&self, request: &RewriteRequest) -> Result<GeneratedContent, LlmError>;
}

#[async_trait]
impl ContentGenerator for ChatCompletionApi {
    async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedContent, LlmError> {
        let messages = [
            ChatMessage::system(request.system_prompt()),
            ChatMessage::user(request.user_prompt()),
        ];
        let sampling = Sampling {
            max_tokens: request.max_tokens(),
            temperature: request.temperature(),
            top_p: TOP_P,
        };
        let text = self.complete(&messages, sampling).await?;
        tracing::info!(
            content_type = request.content_type.as_str(),
            chars = text.chars().count(),
            "Content generated"
        );
        Ok(GeneratedContent::new(text, request.content_type, now()))
    }

    async fn rewrite(&self, request: &RewriteRequest) -> Result<GeneratedContent, LlmError> {
        let messages = [
            ChatMessage::system(REWRITE_SYSTEM_PROMPT),
            ChatMessage::user(request.user_prompt()),
        ];
        let sampling = Sampling {
            max_tokens: REWRITE_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            top_p: TOP_P,
        };
        let text = self.complete(&messages, sampling).await?;
        tracing::info!(
            content_type = request.content_type.as_str(),
            "Content rewritten"
        );
        Ok(GeneratedContent::new(text, request.content_type, now()))
    }
}
