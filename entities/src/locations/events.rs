use super::Location;
use serde::{Deserialize, Serialize};
use shared_kernel::correlation::CorrelationId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationTopic {
    #[serde(rename = "locations.new")]
    New,
    #[serde(rename = "locations.updated")]
    Updated,
}

impl LocationTopic {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationTopic::New => "locations.new",
            LocationTopic::Updated => "locations.updated",
        }
    }
}

/// A location change announced on the event bus. The message key is
/// the location id so that events for one location stay ordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationEvent {
    pub topic: LocationTopic,
    pub correlation_id: CorrelationId,
    pub location: Location,
}

impl LocationEvent {
    pub fn created(location: Location, correlation_id: CorrelationId) -> Self {
        Self {
            topic: LocationTopic::New,
            correlation_id,
            location,
        }
    }

    pub fn updated(location: Location, correlation_id: CorrelationId) -> Self {
        Self {
            topic: LocationTopic::Updated,
            correlation_id,
            location,
        }
    }

    pub fn key(&self) -> String {
        self.location.id.to_string()
    }
}
