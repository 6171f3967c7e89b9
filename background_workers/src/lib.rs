use anyhow::Context;
use celery::Celery;
use entities::locations::events::LocationTopic;
use std::sync::Arc;
use tasks::{location_created, location_updated};

pub mod configuration;
pub mod producer;
pub mod tasks;

/// Queues the consumer listens on, one per location topic.
pub const LOCATION_QUEUES: [&str; 2] = ["locations.new", "locations.updated"];

pub async fn app(redis_url: &str) -> anyhow::Result<Arc<Celery>> {
    celery::app!(
        broker = RedisBroker { redis_url.to_owned() },
        tasks = [
            location_created,
            location_updated
        ],
        task_routes = [
            "location_created" => LocationTopic::New.as_str(),
            "location_updated" => LocationTopic::Updated.as_str()
        ],
        prefetch_count = 2,
        heartbeat = Some(10),
        acks_late = true
    )
    .await
    .context("Failed to initialize app")
}
