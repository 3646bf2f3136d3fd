pub mod implementation;

use reqwest::Body;
use serde::{Deserialize, Serialize};

static FASTTEXT_LANGUAGE_IDENTIFICATION: &str =
    "@cf/meta/fasttext-language-identification";

pub trait LanguageDetection {
    fn fasttext_language_identification(
        &self,
        request: LanguageDetectionRequest,
    ) -> impl std::future::Future<
        Output = anyhow::Result<LanguageDetectionResponse>,
    > + Send;
}

#[derive(Debug, Serialize)]
pub struct LanguageDetectionRequest {
    pub text: String,
}

/// Candidate languages ordered by confidence, best first.
#[derive(Debug, Deserialize)]
pub struct LanguageDetectionResponse {
    pub result: LanguageDetectionResult,
}

#[derive(Debug, Deserialize)]
pub struct LanguageDetectionResult {
    pub languages: Vec<DetectedLanguage>,
}

#[derive(Debug, Deserialize)]
pub struct DetectedLanguage {
    pub language: String,
    pub confidence: f64,
}

impl From<LanguageDetectionRequest> for Body {
    fn from(val: LanguageDetectionRequest) -> Self {
        let body = serde_json::to_string(&val).unwrap();
        Body::from(body)
    }
}

#[cfg(test)]
mod test {
    use super::LanguageDetectionResponse;

    #[test]
    fn test_deserialize_response() {
        // Arrange
        let text = r#"{
            "result": {
                "languages": [
                    { "language": "pt", "confidence": 0.87 },
                    { "language": "es", "confidence": 0.09 }
                ]
            },
            "success": true,
            "errors": [],
            "messages": []
        }"#;

        // Act
        let response =
            serde_json::from_str::<LanguageDetectionResponse>(text);

        // Assert
        let response = response.unwrap();
        assert_eq!(response.result.languages.len(), 2);
        assert_eq!(response.result.languages[0].language, "pt");
    }
}
