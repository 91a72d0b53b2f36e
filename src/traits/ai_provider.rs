use async_trait::async_trait;
use crate::enums::ai_provider_error::AiProviderError;

/// Seam between the request handler and the upstream model backend. A hosted
/// API and a locally loaded model both fit behind the same single-shot call.
#[async_trait]
pub trait AiProvider: Send + Sync {
    async fn generate(&self, prompt: String) -> Result<String, AiProviderError>;

    fn model_id(&self) -> &str;
}
