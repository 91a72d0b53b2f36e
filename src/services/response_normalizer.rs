use std::collections::HashMap;
use once_cell::sync::Lazy;
use serde_json::Value;
use crate::config::constants::MAX_FALLBACK_EXCERPT_CHARS;
use crate::enums::response_shape::ResponseShape;
use crate::services::json_scanner::JsonScanner;
use crate::structs::analysis_report::AnalysisReport;

pub const MANUAL_REVIEW_GUIDANCE: &str = "Manual review required";
pub const MALFORMED_OUTPUT_GUIDANCE: &str = "Do not trust malformed AI output";

const ROOT_CAUSE_FIELD: &str = "rootCause";
const FIX_STEPS_FIELD: &str = "fixSteps";
const WHAT_NOT_TO_DO_FIELD: &str = "whatNotToDo";

static DEFAULT_REPORT_FIELDS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (ROOT_CAUSE_FIELD, "No root cause provided"),
        (FIX_STEPS_FIELD, MANUAL_REVIEW_GUIDANCE),
        (WHAT_NOT_TO_DO_FIELD, MALFORMED_OUTPUT_GUIDANCE),
    ])
});

#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedReply {
    Text(String),
    Json(AnalysisReport),
}

/// Coerces an arbitrary model reply into the configured canonical shape.
///
/// The upstream model is not guaranteed to honor formatting instructions, so
/// every reply is treated as untrusted, partially-structured input. This
/// operation has no error path visible to its caller: whatever cannot be
/// parsed is absorbed into the fallback payload.
pub struct ResponseNormalizer {
    shape: ResponseShape,
    defaults: HashMap<String, String>,
}

impl ResponseNormalizer {
    pub fn new(shape: ResponseShape) -> Self {
        let defaults = DEFAULT_REPORT_FIELDS
            .iter()
            .map(|(field, value)| (field.to_string(), value.to_string()))
            .collect();

        Self { shape, defaults }
    }

    pub fn with_defaults(shape: ResponseShape, defaults: HashMap<String, String>) -> Self {
        Self { shape, defaults }
    }

    pub fn normalize(&self, raw: &str) -> NormalizedReply {
        let cleaned = Self::strip_fences(raw);

        match self.shape {
            ResponseShape::Text => NormalizedReply::Text(cleaned),
            ResponseShape::Json => NormalizedReply::Json(self.coerce_report(&cleaned)),
        }
    }

    /// Removes triple-backtick fences, including language-tagged variants.
    pub fn strip_fences(raw: &str) -> String {
        raw.replace("```json", "").replace("```", "").trim().to_string()
    }

    fn coerce_report(&self, cleaned: &str) -> AnalysisReport {
        if let Some(report) = Self::parse_report(cleaned) {
            return self.complete_fields(report);
        }

        if let Some(region) = JsonScanner::first_object(cleaned) {
            if let Some(report) = Self::parse_report(region) {
                return self.complete_fields(report);
            }
        }

        self.fallback_report(cleaned)
    }

    fn parse_report(text: &str) -> Option<AnalysisReport> {
        let value: Value = serde_json::from_str(text).ok()?;
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value).ok()
    }

    fn complete_fields(&self, mut report: AnalysisReport) -> AnalysisReport {
        if report.root_cause.trim().is_empty() {
            report.root_cause = self.default_for(ROOT_CAUSE_FIELD);
        }
        if report.fix_steps.trim().is_empty() {
            report.fix_steps = self.default_for(FIX_STEPS_FIELD);
        }
        if report.what_not_to_do.trim().is_empty() {
            report.what_not_to_do = self.default_for(WHAT_NOT_TO_DO_FIELD);
        }
        report
    }

    fn default_for(&self, field: &str) -> String {
        self.defaults
            .get(field)
            .cloned()
            .unwrap_or_else(|| MANUAL_REVIEW_GUIDANCE.to_string())
    }

    fn fallback_report(&self, cleaned: &str) -> AnalysisReport {
        let excerpt: String = cleaned.chars().take(MAX_FALLBACK_EXCERPT_CHARS).collect();

        let root_cause = if excerpt.trim().is_empty() {
            self.default_for(ROOT_CAUSE_FIELD)
        } else {
            excerpt
        };

        AnalysisReport {
            root_cause,
            fix_steps: MANUAL_REVIEW_GUIDANCE.to_string(),
            what_not_to_do: MALFORMED_OUTPUT_GUIDANCE.to_string(),
            issue: Some("Model reply was not a valid JSON object".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_normalizer() -> ResponseNormalizer {
        ResponseNormalizer::new(ResponseShape::Json)
    }

    fn report_of(reply: NormalizedReply) -> AnalysisReport {
        match reply {
            NormalizedReply::Json(report) => report,
            NormalizedReply::Text(text) => panic!("expected json reply, got text: {}", text),
        }
    }

    #[test]
    fn fences_are_stripped_from_any_input() {
        let cleaned = ResponseNormalizer::strip_fences("```json\n{\"a\":1}\n```\nplus ``` stray fences ```");
        assert!(!cleaned.contains("```"));
        assert!(!cleaned.contains("```json"));
    }

    #[test]
    fn text_shape_returns_cleaned_text_verbatim() {
        let normalizer = ResponseNormalizer::new(ResponseShape::Text);
        let reply = normalizer.normalize("```\nRoot Cause:\nA null pointer.\n```");

        assert_eq!(reply, NormalizedReply::Text("Root Cause:\nA null pointer.".to_string()));
    }

    #[test]
    fn clean_json_parses_with_exact_fields() {
        let raw = r#"{"rootCause":"NullPointer","fixSteps":"1. Check null","whatNotToDo":"Ignore nulls"}"#;
        let report = report_of(json_normalizer().normalize(raw));

        assert_eq!(report.root_cause, "NullPointer");
        assert_eq!(report.fix_steps, "1. Check null");
        assert_eq!(report.what_not_to_do, "Ignore nulls");
        assert_eq!(report.issue, None);
    }

    #[test]
    fn fenced_example_from_wire_produces_expected_report() {
        let raw = "Here you go:\n```json\n{\"rootCause\":\"NullPointer\",\"fixSteps\":\"1. Check null\",\"whatNotToDo\":\"Ignore nulls\"}\n```";
        let report = report_of(json_normalizer().normalize(raw));

        assert_eq!(report.root_cause, "NullPointer");
        assert_eq!(report.fix_steps, "1. Check null");
        assert_eq!(report.what_not_to_do, "Ignore nulls");
    }

    #[test]
    fn object_embedded_in_prose_is_extracted() {
        let raw = r#"Let me explain. {"rootCause":"Race condition","fixSteps":"1. Add a lock","whatNotToDo":"Busy-wait"} Good luck!"#;
        let report = report_of(json_normalizer().normalize(raw));

        assert_eq!(report.root_cause, "Race condition");
    }

    #[test]
    fn garbage_yields_fallback_with_non_empty_fields() {
        let report = report_of(json_normalizer().normalize("I am sorry, I cannot help with that."));

        assert_eq!(report.root_cause, "I am sorry, I cannot help with that.");
        assert_eq!(report.fix_steps, MANUAL_REVIEW_GUIDANCE);
        assert_eq!(report.what_not_to_do, MALFORMED_OUTPUT_GUIDANCE);
        assert!(report.issue.is_some());
    }

    #[test]
    fn empty_reply_still_fills_every_field() {
        let report = report_of(json_normalizer().normalize(""));

        assert!(!report.root_cause.is_empty());
        assert!(!report.fix_steps.is_empty());
        assert!(!report.what_not_to_do.is_empty());
    }

    #[test]
    fn fallback_excerpt_is_truncated() {
        let long_reply = "x".repeat(MAX_FALLBACK_EXCERPT_CHARS * 2);
        let report = report_of(json_normalizer().normalize(&long_reply));

        assert_eq!(report.root_cause.chars().count(), MAX_FALLBACK_EXCERPT_CHARS);
    }

    #[test]
    fn missing_fields_are_completed_from_defaults() {
        let report = report_of(json_normalizer().normalize(r#"{"rootCause":"Off-by-one"}"#));

        assert_eq!(report.root_cause, "Off-by-one");
        assert_eq!(report.fix_steps, MANUAL_REVIEW_GUIDANCE);
        assert_eq!(report.what_not_to_do, MALFORMED_OUTPUT_GUIDANCE);
    }

    #[test]
    fn supplied_defaults_take_precedence() {
        let defaults = HashMap::from([
            ("fixSteps".to_string(), "Escalate to a human".to_string()),
        ]);
        let normalizer = ResponseNormalizer::with_defaults(ResponseShape::Json, defaults);
        let report = report_of(normalizer.normalize(r#"{"rootCause":"Deadlock"}"#));

        assert_eq!(report.fix_steps, "Escalate to a human");
    }

    #[test]
    fn normalization_is_idempotent_on_clean_json() {
        let raw = r#"{"rootCause":"NullPointer","fixSteps":"1. Check null","whatNotToDo":"Ignore nulls"}"#;
        let normalizer = json_normalizer();

        let first = report_of(normalizer.normalize(raw));
        let second = report_of(normalizer.normalize(&serde_json::to_string(&first).unwrap()));

        assert_eq!(first, second);
    }

    #[test]
    fn non_object_json_falls_back() {
        let report = report_of(json_normalizer().normalize("[1, 2, 3]"));

        assert_eq!(report.fix_steps, MANUAL_REVIEW_GUIDANCE);
        assert!(report.issue.is_some());
    }
}
