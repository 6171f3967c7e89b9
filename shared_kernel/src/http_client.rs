use anyhow::{Context, Error};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::StatusCode;
use reqwest_tracing::TracingMiddleware;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error as ThisError;

use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

/// Timeout and retry budget of one outbound integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpClientSettings {
    pub timeout_seconds: u64,
    pub max_retries: u32,
}

#[derive(ThisError, Debug)]
pub enum HttpClientError {
    #[error(transparent)]
    ResponseError(#[from] Error),
    #[error("httpBuilderError {0}")]
    HTTPBuilderError(String),
}

/// Status and raw body of a response, for callers that give
/// non-success statuses a meaning of their own.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

impl RawResponse {
    pub fn json<DTO: DeserializeOwned>(&self) -> anyhow::Result<DTO> {
        serde_json::from_str(&self.body)
            .with_context(|| format!("Failed to deserialize response {}", self.body))
    }
}

struct HeadersMapGenerator(HeaderMap);

impl HeadersMapGenerator {
    fn into_inner(self) -> HeaderMap {
        self.0
    }
}

impl TryFrom<HashMap<&'static str, String>> for HeadersMapGenerator {
    type Error = HttpClientError;

    fn try_from(value: HashMap<&'static str, String>) -> Result<Self, Self::Error> {
        let mut header_map = HeaderMap::new();

        for (key, value) in value.into_iter() {
            let value = HeaderValue::from_str(&value)
                .map_err(|err| HttpClientError::HTTPBuilderError(format!("{err} {value}")))?;
            header_map.insert(key, value);
        }
        Ok(Self(header_map))
    }
}

/// Outbound client shared by the external API integrations. Transient
/// failures (connection errors, 5xx, 408, 429) are retried with
/// exponential backoff up to `max_retries` times.
#[derive(Clone)]
pub struct HttpClient {
    client: ClientWithMiddleware,
}

impl HttpClient {
    pub fn new(settings: &HttpClientSettings) -> anyhow::Result<Self> {
        let base_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()
            .context("Failed to build http client")?;
        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(settings.max_retries);
        let client = ClientBuilder::new(base_client)
            // Retry failed requests.
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .with(TracingMiddleware::default())
            .build();

        Ok(Self { client })
    }

    pub async fn post_json<Body: Serialize + ?Sized>(
        &self,
        url: Url,
        headers: HashMap<&'static str, String>,
        body: &Body,
    ) -> Result<RawResponse, HttpClientError> {
        let generator = HeadersMapGenerator::try_from(headers)?;
        let header_map = generator.into_inner();
        let response = self
            .client
            .post(url.clone())
            .headers(header_map)
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to post request to {}", url.path()))
            .map_err(HttpClientError::ResponseError)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read response body")
            .map_err(HttpClientError::ResponseError)?;

        tracing::debug!(%status, body = %body, "http request completed");

        Ok(RawResponse { status, body })
    }
}
