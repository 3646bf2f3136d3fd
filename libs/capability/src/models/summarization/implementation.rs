use anyhow::Context;

use crate::models::Models;

use super::{Summarization, SummarizationResponse, BART_LARGE_CNN};

impl Summarization for Models {
    async fn bart_large_cnn(
        &self,
        request: super::SummarizationRequest,
    ) -> anyhow::Result<SummarizationResponse> {
        let text = self.string_response(request, BART_LARGE_CNN).await?;

        let response =
            serde_json::from_str(&text).context("failed to parse response")?;

        Ok(response)
    }
}
