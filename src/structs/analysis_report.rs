use serde::{Deserialize, Serialize};

/// Canonical analysis result. All required keys are always present in the
/// serialized form; `issue` is emitted only when set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    #[serde(default)]
    pub root_cause: String,

    #[serde(default)]
    pub fix_steps: String,

    #[serde(default)]
    pub what_not_to_do: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
}

impl AnalysisReport {
    /// Fixed, user-safe payload substituted when the upstream provider could
    /// not be reached or returned a failure status. The real error text is
    /// logged, never echoed to the caller.
    pub fn upstream_failure() -> Self {
        Self {
            root_cause: "Model API error".to_string(),
            fix_steps: "Check API key or quota".to_string(),
            what_not_to_do: "Do not use invalid API credentials".to_string(),
            issue: Some("The upstream provider could not be reached or returned an error".to_string()),
        }
    }

    /// Renders the fixed-section plain-text layout used by the text variant.
    pub fn to_text_block(&self) -> String {
        format!(
            "Root Cause:\n{}\n\nFix Steps:\n{}\n\nWhat Not To Do:\n{}",
            self.root_cause, self.fix_steps, self.what_not_to_do
        )
    }
}
