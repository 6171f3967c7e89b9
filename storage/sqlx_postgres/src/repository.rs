use crate::configuration::Settings;
use anyhow::Context;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::sync::Arc;

#[derive(Clone)]
pub struct Repository {
    pg_pool: Arc<PgPool>,
}

impl Repository {
    pub fn pool(&self) -> &PgPool {
        self.pg_pool.as_ref()
    }

    pub async fn new() -> anyhow::Result<Self> {
        let pg_connection = Settings::with_db()?;
        let pg_pool = PgPoolOptions::new()
            .max_connections(Settings::max_connections()?)
            .connect_with(pg_connection)
            .await
            .context("Failed to connect to DB")
            .map(Arc::new)?;

        Ok(Self { pg_pool })
    }

    /// Connects to a freshly created, fully migrated database with a random name.
    #[cfg(any(test, feature = "testing"))]
    pub async fn new_test_repo() -> anyhow::Result<Self> {
        use crate::migrations::MigrationManager;
        use sqlx::{Connection, Executor, PgConnection};
        use uuid::Uuid;

        let (connection_options, _) = Settings::without_db()?;
        let mut connection = PgConnection::connect_with(&connection_options)
            .await
            .context("Failed to connect to Postgres")?;

        let db_name = Uuid::new_v4();
        connection
            .execute(&*format!(r#"CREATE DATABASE "{db_name}";"#))
            .await
            .context("Failed to create database")?;
        tracing::info!("created test database {db_name}");

        let pg_pool = PgPool::connect_with(connection_options.database(&db_name.to_string()))
            .await
            .context("Failed to connect to Postgres")
            .map(Arc::new)?;
        MigrationManager::new_with_pool(Arc::clone(&pg_pool))
            .migrate()
            .await?;

        Ok(Self { pg_pool })
    }
}
