use anyhow::ensure;
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Body, Client,
};

pub mod language_detection;
pub mod summarization;
pub mod translation;

/// Workers AI REST client. One instance per configured capability; the
/// capability itself is a trait implemented on this client, one method per
/// hosted model.
#[derive(Debug, Clone)]
pub struct Models {
    base_url: String,
    client: Client,
}

impl Models {
    pub fn new(
        token: &str,
        account_id: &str,
        base_url: &str,
    ) -> anyhow::Result<Self> {
        let base_url = format!(
            "{}/client/v4/accounts/{}/ai/run",
            base_url, account_id
        );

        let mut headers = HeaderMap::new();
        headers.insert("Accept", HeaderValue::from_static("*/*"));
        headers.insert(
            "Authorization",
            HeaderValue::from_str(format!("Bearer {}", token).as_str())?,
        );

        let client = reqwest::ClientBuilder::new()
            .default_headers(headers)
            .build()?;

        Ok(Self { base_url, client })
    }

    async fn string_response<R: Into<Body>>(
        &self,
        request: R,
        model: &str,
    ) -> anyhow::Result<String> {
        let response = self
            .client
            .post(format!("{}/{}", self.base_url, model))
            .body(request)
            .send()
            .await?;

        let status_code = response.status();
        let text = response.text().await;

        ensure!(
            status_code.is_success(),
            "status code: {}, response: {:?}",
            status_code,
            text
        );

        Ok(text?)
    }
}
