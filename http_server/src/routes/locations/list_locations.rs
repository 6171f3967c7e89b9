use actix_web::{web, HttpRequest};
use entities::locations::Location;
use entities::pagination::CursorPage;

use super::filters::LocationsQuery;
use crate::app_container::Application;
use crate::correlation::RequestContext;
use crate::errors::ApiError;
use crate::routes::ApiResponse;

/// Lists locations by name, one cursor page at a time.
#[tracing::instrument(err, skip(app), level = "info")]
pub async fn list_locations(
    query: web::Query<LocationsQuery>,
    app: web::Data<Application>,
    req: HttpRequest,
) -> Result<web::Json<ApiResponse<CursorPage<Location>>>, ApiError> {
    let ctx = RequestContext::from(&req);
    let filters = query.into_inner().into_filters().map_err(|err| {
        let message = err.to_string();
        ApiError::bad_request(message.clone(), vec![message], ctx.correlation_id.clone())
    })?;

    let page = app
        .locations
        .get_paginated_locations(&ctx.correlation_id, filters)
        .await
        .map_err(|err| ApiError::from_location_error(err, ctx.correlation_id.clone()))?;

    Ok(ApiResponse::new(page))
}
