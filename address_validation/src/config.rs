use secrecy::Secret;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;
use shared_kernel::configuration::config;
use shared_kernel::http_client::HttpClientSettings;

#[derive(Deserialize, Debug, Clone)]
pub struct AddressValidationSettings {
    pub url: String,
    pub api_key: Secret<String>,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_seconds: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub max_retries: u32,
}

impl AddressValidationSettings {
    pub fn http_client_settings(&self) -> HttpClientSettings {
        HttpClientSettings {
            timeout_seconds: self.timeout_seconds,
            max_retries: self.max_retries,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct Settings {
    pub address_validation: AddressValidationSettings,
}

impl Settings {
    pub fn parse() -> anyhow::Result<AddressValidationSettings> {
        Ok(config::<Settings>()?.address_validation)
    }
}
