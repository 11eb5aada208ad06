use thiserror::Error;

/// Everything that can go wrong while handling an analysis request. The
/// `Display` text is the exact message the client receives in the error
/// body, so these strings are part of the API contract.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Invalid JSON in request body")]
    InvalidRequestBody,

    #[error("Image is required")]
    MissingImage,

    #[error("OpenAI API key not configured")]
    MissingApiKey,

    /// Provider-side failure, message carries the provider detail verbatim.
    #[error("{0}")]
    Upstream(String),

    /// The model reply held no parseable JSON object.
    #[error("Failed to parse AI response: {0}")]
    MalformedModelOutput(String),
}

impl AnalyzeError {
    pub fn status(&self) -> u16 {
        match self {
            AnalyzeError::MethodNotAllowed => 405,
            AnalyzeError::InvalidRequestBody
            | AnalyzeError::MissingImage
            | AnalyzeError::MissingApiKey => 400,
            AnalyzeError::Upstream(_) | AnalyzeError::MalformedModelOutput(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_4xx() {
        assert_eq!(AnalyzeError::MethodNotAllowed.status(), 405);
        assert_eq!(AnalyzeError::InvalidRequestBody.status(), 400);
        assert_eq!(AnalyzeError::MissingImage.status(), 400);
        assert_eq!(AnalyzeError::MissingApiKey.status(), 400);
    }

    #[test]
    fn test_provider_errors_map_to_500() {
        assert_eq!(AnalyzeError::Upstream("quota".to_string()).status(), 500);
        assert_eq!(
            AnalyzeError::MalformedModelOutput("EOF".to_string()).status(),
            500
        );
    }

    #[test]
    fn test_messages_match_contract() {
        assert_eq!(AnalyzeError::MissingImage.to_string(), "Image is required");
        assert_eq!(
            AnalyzeError::MissingApiKey.to_string(),
            "OpenAI API key not configured"
        );
        assert_eq!(
            AnalyzeError::MalformedModelOutput("expected value".to_string()).to_string(),
            "Failed to parse AI response: expected value"
        );
    }
}
