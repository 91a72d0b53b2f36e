use serde::{Deserialize, Serialize};

/// Inbound analysis request. Constructed per incoming call, discarded after
/// the response is sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    #[serde(default)]
    pub language: String,

    #[serde(default)]
    pub error_message: String,

    #[serde(default)]
    pub code_snippet: String,
}
