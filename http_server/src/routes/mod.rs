mod health;
pub mod locations;

use actix_web::{error, web, HttpRequest};
use serde::Serialize;

use crate::correlation::RequestContext;
use crate::errors::ApiError;

/// Envelope of every successful response.
#[derive(Serialize, Debug)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> web::Json<Self> {
        web::Json(ApiResponse { data })
    }
}

fn extractor_error(title: &str, err: impl ToString, req: &HttpRequest) -> error::Error {
    let ctx = RequestContext::from(req);
    tracing::warn!(correlation_id = %ctx.correlation_id, "{title}: {}", err.to_string());
    ApiError::bad_request(title, vec![err.to_string()], ctx.correlation_id).into()
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, req| extractor_error("failed to parse location data", err, req)),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, req| extractor_error("invalid location id", err, req)),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, req| extractor_error("invalid query params", err, req)),
    )
    .configure(health::init_routes)
    .service(web::scope("/v1").configure(locations::init_routes));
}
