use crate::config::constants::DEFAULT_SERVER_PORT;

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_host() -> String {
        "0.0.0.0".to_string()
    }

    pub fn default_port() -> u16 {
        DEFAULT_SERVER_PORT
    }

    pub fn default_response_format() -> String {
        "text".to_string()
    }

    pub fn default_model() -> String {
        "gemini-2.5-flash".to_string()
    }

    pub fn default_max_tokens() -> u32 {
        3000
    }

    pub fn default_temperature() -> f32 {
        0.0
    }

    pub fn default_request_timeout_secs() -> u64 {
        60
    }
}
