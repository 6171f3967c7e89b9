use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use address_validation::GoogleMapsAddressValidator;
use anyhow::Context;
use background_workers::producer::Producer;
use sqlx_postgres::repository::Repository;
use tracing_actix_web::TracingLogger;
use use_cases::locations::LocationServiceImpl;

use crate::app_container::Application;
use crate::configuration::Settings;

mod app_container;
mod configuration;
mod correlation;
mod errors;
mod routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shared_kernel::tracing::config_telemetry("locations-api")?;
    let result = start().await;
    shared_kernel::tracing::shutdown_global_tracer_provider();
    result
}

async fn start() -> anyhow::Result<()> {
    let settings = Settings::parse()?;

    let repository = Arc::new(Repository::new().await?);
    let address_validator = Arc::new(GoogleMapsAddressValidator::new(
        &address_validation::config::Settings::parse()?,
    )?);
    let producer = Arc::new(Producer::new(&settings.redis.host).await?);
    let locations = LocationServiceImpl::new(repository, address_validator, producer);
    let app_container = web::Data::new(Application::new(Arc::new(locations)));

    tracing::info!(
        name = %settings.application.name,
        host = %settings.application.host,
        port = settings.application.port,
        "starting http server"
    );

    HttpServer::new(move || {
        App::new()
            .wrap_fn(correlation::propagate_correlation_id)
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(app_container.clone())
            .configure(routes::config)
    })
    .bind((settings.application.host.as_str(), settings.application.port))?
    .run()
    .await
    .context("Server failed to run")
}
