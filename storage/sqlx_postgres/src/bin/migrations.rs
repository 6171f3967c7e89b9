use sqlx_postgres::migrations::MigrationManager;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shared_kernel::tracing::config_telemetry("locations-migrations")?;
    let result = run().await;
    shared_kernel::tracing::shutdown_global_tracer_provider();
    result
}

async fn run() -> anyhow::Result<()> {
    let manager = MigrationManager::new().await?;
    manager.migrate().await?;
    tracing::info!("migrations applied");
    Ok(())
}
