mod callbacks;

use callbacks::failure_callback;
use celery::prelude::TaskError;
use celery::task::TaskResult;
use entities::locations::events::{LocationEvent, LocationTopic};

/// Checks the event arrived on the queue of its own topic and logs it.
pub(crate) fn handle_location_event(
    event: &LocationEvent,
    expected: LocationTopic,
) -> TaskResult<()> {
    if event.topic != expected {
        return Err(TaskError::UnexpectedError(format!(
            "received a {} event on the {} queue",
            event.topic.as_str(),
            expected.as_str()
        )));
    }

    let span = tracing::info_span!(
        "location_event",
        topic = expected.as_str(),
        correlation_id = %event.correlation_id,
        key = %event.key()
    );
    let _entered = span.enter();
    match expected {
        LocationTopic::New => tracing::info!(location = ?event.location, "Received new location"),
        LocationTopic::Updated => {
            tracing::info!(location = ?event.location, "Received updated location")
        }
    }
    Ok(())
}

#[celery::task(max_retries = 3, on_failure = failure_callback)]
pub async fn location_created(event: LocationEvent) -> TaskResult<()> {
    handle_location_event(&event, LocationTopic::New)
}

#[celery::task(max_retries = 3, on_failure = failure_callback)]
pub async fn location_updated(event: LocationEvent) -> TaskResult<()> {
    handle_location_event(&event, LocationTopic::Updated)
}
