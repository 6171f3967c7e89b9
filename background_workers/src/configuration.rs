use anyhow::Context;
use serde::Deserialize;
use shared_kernel::configuration::config;

#[derive(Debug, Deserialize)]
pub struct RedisSettings {
    pub host: String,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub redis: RedisSettings,
}

impl Settings {
    pub fn parse() -> anyhow::Result<Settings> {
        config::<Settings>().context("Failed to deserialize settings to background_worker settings")
    }
}
