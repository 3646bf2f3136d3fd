pub mod implementation;

use reqwest::Body;
use serde::{Deserialize, Serialize};

static BART_LARGE_CNN: &str = "@cf/facebook/bart-large-cnn";

pub trait Summarization {
    fn bart_large_cnn(
        &self,
        request: SummarizationRequest,
    ) -> impl std::future::Future<Output = anyhow::Result<SummarizationResponse>>
           + Send;
}

#[derive(Debug, Serialize)]
pub struct SummarizationRequest {
    pub input_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct SummarizationResponse {
    pub result: SummarizationResult,
}

#[derive(Debug, Deserialize)]
pub struct SummarizationResult {
    pub summary: String,
}

impl From<SummarizationRequest> for Body {
    fn from(val: SummarizationRequest) -> Self {
        let body = serde_json::to_string(&val).unwrap();
        Body::from(body)
    }
}

#[cfg(test)]
mod test {
    use super::SummarizationRequest;

    #[test]
    fn test_serialize_request_skips_missing_max_length() {
        // Arrange
        let request = SummarizationRequest {
            input_text: "a long text".to_string(),
            max_length: None,
        };

        // Act
        let body = serde_json::to_value(&request);

        // Assert
        assert_eq!(
            body.unwrap(),
            serde_json::json!({ "input_text": "a long text" })
        );
    }
}
