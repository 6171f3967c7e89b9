use thiserror::Error;

/// Failures of the location use cases. Everything except `Internal`
/// is caused by the caller's input.
#[derive(Error, Debug)]
pub enum LocationError {
    #[error("location name '{0}' is already in use")]
    NameAlreadyInUse(String),
    #[error("the address information does not correspond to a valid address")]
    AddressNotValid,
    #[error("{0}")]
    Business(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl LocationError {
    pub fn is_client_error(&self) -> bool {
        !matches!(self, LocationError::Internal(_))
    }
}
