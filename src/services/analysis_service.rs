use std::sync::Arc;
use chrono::{DateTime, Utc};
use uuid::Uuid;
use crate::enums::response_shape::ResponseShape;
use crate::helpers::prompt_generator::render_analysis_prompt;
use crate::services::response_normalizer::{NormalizedReply, ResponseNormalizer};
use crate::structs::analysis_report::AnalysisReport;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::health_status::HealthStatus;
use crate::traits::ai_provider::AiProvider;

pub enum AnalysisOutcome {
    Completed(NormalizedReply),
    UpstreamFailed(NormalizedReply),
}

/// Per-process service state: constructed once before serving, read-only
/// thereafter. Each request is independent; nothing here is mutated after
/// startup.
pub struct AnalysisService {
    provider: Arc<dyn AiProvider>,
    normalizer: ResponseNormalizer,
    shape: ResponseShape,
    started_at: DateTime<Utc>,
}

impl AnalysisService {
    pub fn new(provider: Arc<dyn AiProvider>, shape: ResponseShape) -> Self {
        Self {
            provider,
            normalizer: ResponseNormalizer::new(shape),
            shape,
            started_at: Utc::now(),
        }
    }

    pub async fn analyze(&self, request: &AnalysisRequest) -> AnalysisOutcome {
        let request_id = Uuid::new_v4();
        let language = if request.language.trim().is_empty() { "unspecified" } else { request.language.as_str() };

        log::info!("🔍 [{}] Forwarding analysis request (language: {})", request_id, language);

        let prompt = render_analysis_prompt(request, self.shape);

        match self.provider.generate(prompt).await {
            Ok(raw_reply) => {
                log::info!("✅ [{}] Upstream reply received ({} chars)", request_id, raw_reply.len());
                AnalysisOutcome::Completed(self.normalizer.normalize(&raw_reply))
            }
            Err(e) => {
                // Logged in full here; the caller only ever sees the canned payload.
                log::error!("❌ [{}] Upstream call failed: {}", request_id, e);
                AnalysisOutcome::UpstreamFailed(self.transport_fallback())
            }
        }
    }

    pub fn health(&self) -> HealthStatus {
        HealthStatus {
            status: "healthy".to_string(),
            model: self.provider.model_id().to_string(),
            response_format: self.shape.name().to_string(),
            started_at: self.started_at.to_rfc3339(),
        }
    }

    fn transport_fallback(&self) -> NormalizedReply {
        let report = AnalysisReport::upstream_failure();

        match self.shape {
            ResponseShape::Text => NormalizedReply::Text(report.to_text_block()),
            ResponseShape::Json => NormalizedReply::Json(report),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::enums::ai_provider_error::AiProviderError;

    struct StubProvider {
        reply: Result<String, AiProviderError>,
    }

    #[async_trait]
    impl AiProvider for StubProvider {
        async fn generate(&self, _prompt: String) -> Result<String, AiProviderError> {
            self.reply.clone()
        }

        fn model_id(&self) -> &str {
            "stub-model"
        }
    }

    fn service_with(reply: Result<String, AiProviderError>, shape: ResponseShape) -> AnalysisService {
        AnalysisService::new(Arc::new(StubProvider { reply }), shape)
    }

    fn request() -> AnalysisRequest {
        AnalysisRequest {
            language: "java".to_string(),
            error_message: "NullPointerException".to_string(),
            code_snippet: "user.getName();".to_string(),
        }
    }

    #[test]
    fn upstream_failure_yields_canned_fallback_without_normalizing() {
        tokio_test::block_on(async {
            let upstream_error = AiProviderError::ApiError("HTTP 500: secret internal detail".to_string());
            let service = service_with(Err(upstream_error), ResponseShape::Json);

            match service.analyze(&request()).await {
                AnalysisOutcome::UpstreamFailed(NormalizedReply::Json(report)) => {
                    assert_eq!(report, AnalysisReport::upstream_failure());
                    assert!(!report.root_cause.contains("secret internal detail"));
                }
                _ => panic!("expected upstream failure outcome"),
            }
        });
    }

    #[test]
    fn upstream_failure_in_text_shape_renders_section_block() {
        tokio_test::block_on(async {
            let service = service_with(
                Err(AiProviderError::NetworkError("connection refused".to_string())),
                ResponseShape::Text,
            );

            match service.analyze(&request()).await {
                AnalysisOutcome::UpstreamFailed(NormalizedReply::Text(text)) => {
                    assert!(text.starts_with("Root Cause:"));
                    assert!(text.contains("Fix Steps:"));
                    assert!(text.contains("What Not To Do:"));
                    assert!(!text.contains("connection refused"));
                }
                _ => panic!("expected upstream failure outcome"),
            }
        });
    }

    #[test]
    fn successful_reply_is_normalized() {
        tokio_test::block_on(async {
            let raw = "```json\n{\"rootCause\":\"NullPointer\",\"fixSteps\":\"1. Check null\",\"whatNotToDo\":\"Ignore nulls\"}\n```";
            let service = service_with(Ok(raw.to_string()), ResponseShape::Json);

            match service.analyze(&request()).await {
                AnalysisOutcome::Completed(NormalizedReply::Json(report)) => {
                    assert_eq!(report.root_cause, "NullPointer");
                }
                _ => panic!("expected completed outcome"),
            }
        });
    }

    #[test]
    fn health_reports_model_and_format() {
        let service = service_with(Ok(String::new()), ResponseShape::Text);
        let health = service.health();

        assert_eq!(health.status, "healthy");
        assert_eq!(health.model, "stub-model");
        assert_eq!(health.response_format, "text");
    }
}
