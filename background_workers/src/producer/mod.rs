use crate::app;
use crate::tasks::{location_created, location_updated};
use anyhow::Context;
use async_trait::async_trait;
use celery::Celery;
use entities::locations::events::{LocationEvent, LocationTopic};
use std::sync::Arc;
use use_cases::locations::LocationEventPublisher;

#[derive(Clone)]
pub struct Producer {
    pub(crate) app: Arc<Celery>,
}

impl Producer {
    pub async fn new(redis_url: &str) -> anyhow::Result<Self> {
        let app = app(redis_url).await?;

        Ok(Self { app })
    }
}

#[async_trait]
impl LocationEventPublisher for Producer {
    #[tracing::instrument(err, skip(self, event), fields(topic = event.topic.as_str(), key = %event.key()), level = "info")]
    async fn publish(&self, event: LocationEvent) -> anyhow::Result<()> {
        let sent = match event.topic {
            LocationTopic::New => self.app.send_task(location_created::new(event)).await,
            LocationTopic::Updated => self.app.send_task(location_updated::new(event)).await,
        };
        let result = sent.context("Failed to send task")?;
        tracing::debug!(task_id = %result.task_id, "location event sent");
        Ok(())
    }
}
