use actix_web::{web, HttpRequest};
use entities::locations::{Location, LocationId};
use use_cases::locations::data::UpdateLocationRequest;
use validator::Validate;

use crate::app_container::Application;
use crate::correlation::RequestContext;
use crate::errors::ApiError;
use crate::routes::ApiResponse;

#[tracing::instrument(err, skip(app), level = "info")]
pub async fn update_location(
    path: web::Path<LocationId>,
    data: web::Json<UpdateLocationRequest>,
    app: web::Data<Application>,
    req: HttpRequest,
) -> Result<web::Json<ApiResponse<Location>>, ApiError> {
    let ctx = RequestContext::from(&req);
    let location_id = path.into_inner();
    let request = data.into_inner();

    if request.id != location_id {
        let message =
            "mismatch between location ID in url and the one in the request payload".to_string();
        return Err(ApiError::bad_request(
            message.clone(),
            vec![message],
            ctx.correlation_id,
        ));
    }
    if let Err(errors) = request.validate() {
        return Err(ApiError::validation(&errors, ctx.correlation_id));
    }

    let location = app
        .locations
        .update_location(&ctx.correlation_id, request)
        .await
        .map_err(|err| ApiError::from_location_error(err, ctx.correlation_id.clone()))?;

    Ok(ApiResponse::new(location))
}
