pub mod commands;
pub mod response_shape;
pub mod ai_provider_error;
