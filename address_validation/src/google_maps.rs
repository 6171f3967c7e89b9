use crate::config::AddressValidationSettings;
use anyhow::{bail, Context};
use async_trait::async_trait;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use shared_kernel::http_client::HttpClient;
use std::collections::HashMap;
use url::Url;
use use_cases::locations::data::{AddressMatch, AddressValidationRequest};
use use_cases::locations::AddressValidator;

#[derive(Deserialize, Debug)]
struct AddressValidationResponse {
    #[serde(default)]
    matches: Vec<AddressMatch>,
}

pub struct GoogleMapsAddressValidator {
    client: HttpClient,
    url: Url,
    api_key: Secret<String>,
}

impl GoogleMapsAddressValidator {
    pub fn new(settings: &AddressValidationSettings) -> anyhow::Result<Self> {
        let url = Url::parse(&settings.url).context("Failed to parse address validation url")?;
        let client = HttpClient::new(&settings.http_client_settings())?;
        Ok(Self {
            client,
            url,
            api_key: settings.api_key.clone(),
        })
    }

    fn request_url(&self) -> Url {
        let mut url = self.url.clone();
        url.query_pairs_mut()
            .append_pair("key", self.api_key.expose_secret());
        url
    }
}

#[async_trait]
impl AddressValidator for GoogleMapsAddressValidator {
    /// A 404 means the address could not be resolved. Among the matches
    /// only a premise is precise enough to locate a site.
    #[tracing::instrument(err, skip(self), level = "info")]
    async fn validate_address(
        &self,
        request: AddressValidationRequest,
    ) -> anyhow::Result<Option<AddressMatch>> {
        let response = self
            .client
            .post_json(self.request_url(), HashMap::new(), &request)
            .await?;
        tracing::info!(
            status_code = %response.status,
            body = %response.body,
            "validate address endpoint response"
        );

        match response.status {
            StatusCode::OK => {}
            StatusCode::NOT_FOUND => return Ok(None),
            status => {
                tracing::error!(error_payload = %response.body, "error from Google Maps API");
                bail!("error from Google Maps API: {status}");
            }
        }

        let body = response.json::<AddressValidationResponse>()?;
        Ok(body.matches.into_iter().find(AddressMatch::is_premise))
    }
}
