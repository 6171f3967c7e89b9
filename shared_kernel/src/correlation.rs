use crate::string_key;

/// Header used to propagate the request correlation id between services.
pub const CORRELATION_ID_HEADER: &str = "Correlation-Id";

string_key!(CorrelationId);

impl CorrelationId {
    pub fn generate() -> Self {
        CorrelationId::new(uuid::Uuid::new_v4().to_string())
    }

    /// Keeps an id supplied by the caller, generating one when it is missing or blank.
    pub fn from_header(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(value) if !value.is_empty() => CorrelationId::from(value),
            _ => CorrelationId::generate(),
        }
    }
}
