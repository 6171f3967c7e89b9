use anyhow::Context;
use background_workers::configuration::Settings;
use background_workers::{app, LOCATION_QUEUES};
use shared_kernel::tracing::{config_telemetry, shutdown_global_tracer_provider};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    config_telemetry("locations-consumer")?;
    let settings = Settings::parse()?;
    let app = app(&settings.redis.host).await?;

    let result = app
        .consume_from(&LOCATION_QUEUES)
        .await
        .context("Failed to consume tasks");

    shutdown_global_tracer_provider();
    result
}
