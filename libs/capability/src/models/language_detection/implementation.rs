use anyhow::Context;

use crate::models::Models;

use super::{
    LanguageDetection, LanguageDetectionResponse,
    FASTTEXT_LANGUAGE_IDENTIFICATION,
};

impl LanguageDetection for Models {
    async fn fasttext_language_identification(
        &self,
        request: super::LanguageDetectionRequest,
    ) -> anyhow::Result<LanguageDetectionResponse> {
        let text = self
            .string_response(request, FASTTEXT_LANGUAGE_IDENTIFICATION)
            .await?;

        let response =
            serde_json::from_str(&text).context("failed to parse response")?;

        Ok(response)
    }
}
