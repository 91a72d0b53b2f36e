pub mod analysis_service;
pub mod response_normalizer;
pub mod json_scanner;
pub mod ai_providers;
