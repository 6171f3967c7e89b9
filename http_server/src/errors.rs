use actix_web::{
    error,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use serde::Serialize;
use shared_kernel::correlation::CorrelationId;
use thiserror::Error;
use use_cases::locations::errors::LocationError;
use validator::ValidationErrors;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{title}")]
    BadRequest {
        title: String,
        details: Vec<String>,
        correlation_id: CorrelationId,
    },
    #[error("{title}")]
    NotFound {
        title: String,
        correlation_id: CorrelationId,
    },
    #[error("Internal server error")]
    InternalServerError {
        error: anyhow::Error,
        correlation_id: CorrelationId,
    },
}

#[derive(Serialize)]
struct ErrorEnvelope<'a> {
    error: ErrorBody<'a>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    title: String,
    details: Vec<ErrorDetail>,
    correlation_id: &'a str,
}

#[derive(Serialize)]
struct ErrorDetail {
    message: String,
}

impl ApiError {
    pub fn bad_request(
        title: impl Into<String>,
        details: Vec<String>,
        correlation_id: CorrelationId,
    ) -> Self {
        ApiError::BadRequest {
            title: title.into(),
            details,
            correlation_id,
        }
    }

    pub fn validation(errors: &ValidationErrors, correlation_id: CorrelationId) -> Self {
        let mut details = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    error
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| format!("{field} is invalid"))
                })
            })
            .collect::<Vec<_>>();
        details.sort();
        ApiError::bad_request("invalid location data", details, correlation_id)
    }

    pub fn from_location_error(error: LocationError, correlation_id: CorrelationId) -> Self {
        match error {
            LocationError::Internal(error) => ApiError::InternalServerError {
                error,
                correlation_id,
            },
            client_error => {
                let message = client_error.to_string();
                ApiError::bad_request(message.clone(), vec![message], correlation_id)
            }
        }
    }

    fn correlation_id(&self) -> &CorrelationId {
        match self {
            ApiError::BadRequest { correlation_id, .. }
            | ApiError::NotFound { correlation_id, .. }
            | ApiError::InternalServerError { correlation_id, .. } => correlation_id,
        }
    }

    fn details(&self) -> Vec<ErrorDetail> {
        let messages = match self {
            ApiError::BadRequest { details, .. } => details.clone(),
            ApiError::NotFound { title, .. } => vec![title.clone()],
            ApiError::InternalServerError { error, .. } => vec![error.to_string()],
        };
        messages
            .into_iter()
            .map(|message| ErrorDetail { message })
            .collect()
    }
}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match *self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InternalServerError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let envelope = ErrorEnvelope {
            error: ErrorBody {
                title: self.to_string(),
                details: self.details(),
                correlation_id: self.correlation_id().as_ref(),
            },
        };
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(envelope)
    }
}
