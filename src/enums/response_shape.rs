/// Canonical output shape the caller contracts to receive, regardless of how
/// the upstream model actually responded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    Text,
    Json,
}

impl ResponseShape {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" | "plain" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_known_formats() {
        assert_eq!(ResponseShape::parse("text"), Some(ResponseShape::Text));
        assert_eq!(ResponseShape::parse("plain"), Some(ResponseShape::Text));
        assert_eq!(ResponseShape::parse(" JSON "), Some(ResponseShape::Json));
        assert_eq!(ResponseShape::parse("xml"), None);
    }
}
