use crate::configuration::Settings;
use anyhow::Context;
use sqlx::postgres::PgPool;
use std::sync::Arc;

/// Applies the location schema migrations embedded from `./migrations`.
#[derive(Clone)]
pub struct MigrationManager {
    pg_pool: Arc<PgPool>,
}

impl MigrationManager {
    pub async fn new() -> anyhow::Result<Self> {
        let pg_pool = PgPool::connect_with(Settings::with_db()?)
            .await
            .context("Failed to connect to DB")?;

        Ok(Self::new_with_pool(Arc::new(pg_pool)))
    }

    pub fn new_with_pool(pool: Arc<PgPool>) -> Self {
        Self { pg_pool: pool }
    }

    pub async fn migrate(&self) -> anyhow::Result<()> {
        sqlx::migrate!()
            .run(self.pg_pool.as_ref())
            .await
            .context("Failed to run location schema migrations")
    }
}

#[cfg(test)]
mod tests {
    use super::MigrationManager;
    use crate::repository::Repository;
    use std::sync::Arc;

    #[tokio::test]
    #[ignore = "requires a running Postgres"]
    async fn test_that_migrating_an_up_to_date_database_is_a_no_op() {
        let repo = Repository::new_test_repo().await.unwrap();

        let manager = MigrationManager::new_with_pool(Arc::new(repo.pool().clone()));

        assert!(manager.migrate().await.is_ok());
    }
}
