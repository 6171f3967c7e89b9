use anyhow::{anyhow, Context};
use serde::de::DeserializeOwned;

const ENVIRONMENT_VARIABLE: &str = "APP_ENVIRONMENT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Dev,
    Qa,
    Uat,
    Production,
}

impl Environment {
    pub fn current() -> anyhow::Result<Self> {
        std::env::var(ENVIRONMENT_VARIABLE)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or(Ok(Environment::Local), Environment::try_from)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Dev => "dev",
            Environment::Qa => "qa",
            Environment::Uat => "uat",
            Environment::Production => "prod",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "dev" => Ok(Environment::Dev),
            "qa" => Ok(Environment::Qa),
            "uat" => Ok(Environment::Uat),
            "prod" | "production" => Ok(Environment::Production),
            other => Err(anyhow!(
                "{other} is not a supported environment. Use one of local, dev, qa, uat or prod"
            )),
        }
    }
}

/// Layers `configuration/base.yaml`, the optional `configuration/<environment>.yaml`
/// and `APP_` prefixed environment variables, e.g. `APP_DATABASE__PORT=5433`.
pub fn config<Settings: DeserializeOwned>() -> anyhow::Result<Settings> {
    let base_path = std::env::current_dir().context("Failed to determine the current directory")?;
    let configuration_directory = base_path.join("configuration");
    let environment = Environment::current()?;
    let environment_file = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(
            config::File::from(configuration_directory.join(environment_file)).required(false),
        )
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()
        .context("Failed to build configuration")?;

    settings
        .try_deserialize::<Settings>()
        .context("Failed to deserialize settings")
}
