use actix_web::{web, HttpRequest};
use entities::locations::Location;
use use_cases::locations::data::CreateLocationRequest;
use validator::Validate;

use crate::app_container::Application;
use crate::correlation::RequestContext;
use crate::errors::ApiError;
use crate::routes::ApiResponse;

/// Creates a location together with its default sub location.
#[tracing::instrument(err, skip(app), level = "info")]
pub async fn create_location(
    data: web::Json<CreateLocationRequest>,
    app: web::Data<Application>,
    req: HttpRequest,
) -> Result<web::Json<ApiResponse<Location>>, ApiError> {
    let ctx = RequestContext::from(&req);
    let request = data.into_inner();
    if let Err(errors) = request.validate() {
        return Err(ApiError::validation(&errors, ctx.correlation_id));
    }

    let location = app
        .locations
        .create_location(&ctx.correlation_id, request)
        .await
        .map_err(|err| ApiError::from_location_error(err, ctx.correlation_id.clone()))?;

    Ok(ApiResponse::new(location))
}
