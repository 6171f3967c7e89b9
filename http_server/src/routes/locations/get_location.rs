use actix_web::{web, HttpRequest};
use entities::locations::{Location, LocationId};

use crate::app_container::Application;
use crate::correlation::RequestContext;
use crate::errors::ApiError;
use crate::routes::ApiResponse;

#[tracing::instrument(err, skip(app), level = "info")]
pub async fn get_location(
    path: web::Path<LocationId>,
    app: web::Data<Application>,
    req: HttpRequest,
) -> Result<web::Json<ApiResponse<Location>>, ApiError> {
    let ctx = RequestContext::from(&req);
    let location_id = path.into_inner();

    let location = app
        .locations
        .get_location_by_id(&ctx.correlation_id, location_id)
        .await
        .map_err(|err| ApiError::from_location_error(err, ctx.correlation_id.clone()))?;

    location.map(ApiResponse::new).ok_or_else(|| ApiError::NotFound {
        title: format!("location with ID {location_id} not found"),
        correlation_id: ctx.correlation_id,
    })
}
