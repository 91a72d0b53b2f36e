use crate::enums::response_shape::ResponseShape;
use crate::prompts::json_analysis_prompt::JSON_ANALYSIS_PROMPT;
use crate::prompts::text_analysis_prompt::TEXT_ANALYSIS_PROMPT;
use crate::structs::analysis_request::AnalysisRequest;

pub fn render_analysis_prompt(request: &AnalysisRequest, shape: ResponseShape) -> String {
    let instructions = match shape {
        ResponseShape::Text => TEXT_ANALYSIS_PROMPT,
        ResponseShape::Json => JSON_ANALYSIS_PROMPT,
    };

    format!(
        "{}\n\nLANGUAGE: {}\nERROR: {}\nCODE:\n{}\n",
        instructions, request.language, request.error_message, request.code_snippet
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> AnalysisRequest {
        AnalysisRequest {
            language: "python".to_string(),
            error_message: "KeyError: 'name'".to_string(),
            code_snippet: "user['name']".to_string(),
        }
    }

    #[test]
    fn text_prompt_carries_request_fields() {
        let prompt = render_analysis_prompt(&request(), ResponseShape::Text);

        assert!(prompt.contains("RETURN EXACTLY PLAIN TEXT"));
        assert!(prompt.contains("LANGUAGE: python"));
        assert!(prompt.contains("ERROR: KeyError: 'name'"));
        assert!(prompt.contains("CODE:\nuser['name']"));
    }

    #[test]
    fn json_prompt_requests_json_object() {
        let prompt = render_analysis_prompt(&request(), ResponseShape::Json);

        assert!(prompt.contains("\"rootCause\""));
        assert!(prompt.contains("\"fixSteps\""));
        assert!(prompt.contains("\"whatNotToDo\""));
    }
}
