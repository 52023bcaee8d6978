use async_trait::async_trait;
use generation_client::{GeminiClient, GenerationError};

/// Seam between the HTTP handlers and the generation service, so tests can
/// substitute a stub for the real client.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        GeminiClient::generate(self, prompt).await
    }
}
