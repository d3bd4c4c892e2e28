use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::error::{Error, Result};

/// Thin wrapper around [`reqwest::Client`] with the base URL baked in.
///
/// Responses are transparently gunzipped. A 404 maps to [`Error::NotFound`]
/// so lookups can turn it into an absent result; any other non-success
/// status becomes an HTTP error.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub async fn get(&self, endpoint: &str, query: &[(&str, String)]) -> Result<String> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self.client.get(&url).query(query).send().await?;
        Self::text(response).await
    }

    pub async fn get_with_bearer(
        &self,
        endpoint: &str,
        token: &str,
        query: &[(&str, String)],
    ) -> Result<String> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .query(query)
            .send()
            .await?;
        Self::text(response).await
    }

    pub async fn post_with_bearer(
        &self,
        endpoint: &str,
        token: &str,
        query: &[(&str, String)],
    ) -> Result<String> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .query(query)
            .send()
            .await?;
        Self::text(response).await
    }

    async fn text(response: reqwest::Response) -> Result<String> {
        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::NotFound);
        }
        let response = response.error_for_status()?;
        Ok(response.text().await?)
    }
}
