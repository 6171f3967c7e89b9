use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;
use shared_kernel::configuration::config;
use sqlx::postgres::{PgConnectOptions, PgSslMode};

const DEFAULT_MAX_CONNECTIONS: u32 = 10;

fn default_max_connections() -> u32 {
    DEFAULT_MAX_CONNECTIONS
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    database: DbSettings,
}

type DbName = String;
#[derive(Debug, Deserialize)]
pub struct DbSettings {
    host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    port: u16,
    username: String,
    password: Secret<String>,
    database_name: DbName,
    require_ssl: bool,
    #[serde(
        default = "default_max_connections",
        deserialize_with = "deserialize_number_from_string"
    )]
    max_connections: u32,
}

impl DbSettings {
    fn connect_options(&self) -> PgConnectOptions {
        let ssl_mode = if self.require_ssl {
            PgSslMode::Require
        } else {
            PgSslMode::Prefer
        };
        PgConnectOptions::new()
            .host(&self.host)
            .username(&self.username)
            .password(self.password.expose_secret())
            .port(self.port)
            .ssl_mode(ssl_mode)
    }
}

impl Settings {
    fn parse() -> anyhow::Result<Self> {
        config::<Settings>()
    }

    pub fn without_db() -> anyhow::Result<(PgConnectOptions, DbName)> {
        let config = Self::parse()?.database;
        Ok((config.connect_options(), config.database_name))
    }

    pub fn with_db() -> anyhow::Result<PgConnectOptions> {
        let (options, database_name) = Self::without_db()?;
        Ok(options.database(&database_name))
    }

    pub fn max_connections() -> anyhow::Result<u32> {
        Ok(Self::parse()?.database.max_connections)
    }
}
