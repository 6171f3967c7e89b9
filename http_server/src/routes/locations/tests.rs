use crate::app_container::Application;
use crate::correlation::propagate_correlation_id;
use crate::routes;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use anyhow::anyhow;
use async_trait::async_trait;
use entities::locations::{
    ContactInformation, Location, LocationId, LocationInformation, LocationInformationId,
    LocationType, LocationsFilters, Supplier,
};
use entities::pagination::{CursorPage, Direction};
use mockall::mock;
use serde_json::{json, Value};
use shared_kernel::correlation::CorrelationId;
use std::sync::Arc;
use use_cases::locations::data::{CreateLocationRequest, UpdateLocationRequest};
use use_cases::locations::errors::LocationError;
use use_cases::locations::LocationService;

mock! {
    pub Locations {}

    #[async_trait]
    impl LocationService for Locations {
        async fn create_location(
            &self,
            correlation_id: &CorrelationId,
            request: CreateLocationRequest,
        ) -> Result<Location, LocationError>;

        async fn update_location(
            &self,
            correlation_id: &CorrelationId,
            request: UpdateLocationRequest,
        ) -> Result<Location, LocationError>;

        async fn get_location_by_id(
            &self,
            correlation_id: &CorrelationId,
            id: LocationId,
        ) -> Result<Option<Location>, LocationError>;

        async fn get_paginated_locations(
            &self,
            correlation_id: &CorrelationId,
            filters: LocationsFilters,
        ) -> Result<CursorPage<Location>, LocationError>;
    }
}

fn location(name: &str) -> Location {
    Location {
        id: LocationId::new(),
        name: name.to_string(),
        information: LocationInformation {
            id: LocationInformationId::new(),
            address: "1600 Amphitheatre Pkwy".to_string(),
            city: "Mountain View".to_string(),
            state: "CA".to_string(),
            zipcode: "94043".to_string(),
            latitude: 37.42,
            longitude: -122.08,
            contact_information: ContactInformation::default(),
        },
        location_type: LocationType {
            id: 2,
            name: "Wholesale".to_string(),
        },
        supplier: Supplier {
            id: 4,
            name: "Supplier 4".to_string(),
        },
        active: true,
    }
}

fn location_payload(id: Option<LocationId>) -> Value {
    let mut payload = json!({
        "supplier_id": 4,
        "name": "Depot",
        "address": "1600 Amphitheatre Pkwy",
        "city": "Mountain View",
        "state": "CA",
        "zipcode": "94043",
        "location_type_id": 2,
        "email": "ops@example.com"
    });
    if let Some(id) = id {
        payload["id"] = json!(id.to_string());
        payload["active"] = json!(true);
    }
    payload
}

async fn call(service: MockLocations, req: test::TestRequest) -> ServiceResponse {
    let app = test::init_service(
        App::new()
            .wrap_fn(propagate_correlation_id)
            .app_data(web::Data::new(Application::new(Arc::new(service))))
            .configure(routes::config),
    )
    .await;
    test::call_service(&app, req.to_request()).await
}

async fn json_body(resp: ServiceResponse) -> Value {
    test::read_body_json(resp).await
}

#[actix_web::test]
async fn test_that_a_location_can_be_created() {
    let mut service = MockLocations::new();
    let created = location("Depot");
    let expected = created.clone();
    service
        .expect_create_location()
        .withf(|correlation_id, request| {
            correlation_id.inner() == "corr-1" && request.name == "Depot"
        })
        .times(1)
        .return_once(move |_, _| Ok(created));

    let resp = call(
        service,
        test::TestRequest::post()
            .uri("/v1/locations")
            .insert_header(("Correlation-Id", "corr-1"))
            .set_json(location_payload(None)),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get("correlation-id").unwrap(), "corr-1");
    let body = json_body(resp).await;
    assert_eq!(body["data"]["id"], json!(expected.id.to_string()));
    assert_eq!(body["data"]["name"], "Depot");
    assert_eq!(body["data"]["location_type"]["type"], "Wholesale");
}

#[actix_web::test]
async fn test_that_invalid_bodies_are_rejected_before_the_service() {
    let mut service = MockLocations::new();
    service.expect_create_location().never();
    let mut payload = location_payload(None);
    payload["name"] = json!("");
    payload["supplier_id"] = json!(0);

    let resp = call(
        service,
        test::TestRequest::post()
            .uri("/v1/locations")
            .insert_header(("Correlation-Id", "corr-2"))
            .set_json(payload),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert_eq!(
        body["error"]["details"],
        json!([
            { "message": "name is required" },
            { "message": "supplier_id is required" }
        ])
    );
    assert_eq!(body["error"]["correlation_id"], "corr-2");
}

#[actix_web::test]
async fn test_that_unparseable_bodies_are_bad_requests() {
    let mut service = MockLocations::new();
    service.expect_create_location().never();

    let resp = call(
        service,
        test::TestRequest::post()
            .uri("/v1/locations")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json"),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert_eq!(body["error"]["title"], "failed to parse location data");
}

#[actix_web::test]
async fn test_that_business_errors_are_bad_requests() {
    let mut service = MockLocations::new();
    service
        .expect_create_location()
        .return_once(|_, _| Err(LocationError::NameAlreadyInUse("Depot".to_string())));

    let resp = call(
        service,
        test::TestRequest::post()
            .uri("/v1/locations")
            .set_json(location_payload(None)),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert_eq!(
        body["error"]["title"],
        "location name 'Depot' is already in use"
    );
}

#[actix_web::test]
async fn test_that_internal_errors_are_server_errors() {
    let mut service = MockLocations::new();
    service
        .expect_create_location()
        .return_once(|_, _| Err(LocationError::Internal(anyhow!("db down"))));

    let resp = call(
        service,
        test::TestRequest::post()
            .uri("/v1/locations")
            .set_json(location_payload(None)),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_web::test]
async fn test_that_a_location_can_be_updated() {
    let mut service = MockLocations::new();
    let updated = location("Depot");
    let id = updated.id;
    service
        .expect_update_location()
        .withf(move |_, request| request.id == id && request.active)
        .return_once(move |_, _| Ok(updated));

    let resp = call(
        service,
        test::TestRequest::put()
            .uri(&format!("/v1/locations/{id}"))
            .set_json(location_payload(Some(id))),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["data"]["id"], json!(id.to_string()));
}

#[actix_web::test]
async fn test_that_mismatched_ids_are_rejected() {
    let mut service = MockLocations::new();
    service.expect_update_location().never();

    let resp = call(
        service,
        test::TestRequest::put()
            .uri(&format!("/v1/locations/{}", LocationId::new()))
            .set_json(location_payload(Some(LocationId::new()))),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(resp).await["error"]["title"],
        "mismatch between location ID in url and the one in the request payload"
    );
}

#[actix_web::test]
async fn test_that_a_location_can_be_fetched() {
    let mut service = MockLocations::new();
    let found = location("Depot");
    let id = found.id;
    service
        .expect_get_location_by_id()
        .withf(move |_, requested| *requested == id)
        .return_once(move |_, _| Ok(Some(found)));

    let resp = call(
        service,
        test::TestRequest::get().uri(&format!("/v1/locations/{id}")),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["data"]["name"], "Depot");
}

#[actix_web::test]
async fn test_that_missing_locations_are_not_found() {
    let mut service = MockLocations::new();
    service
        .expect_get_location_by_id()
        .return_once(|_, _| Ok(None));

    let resp = call(
        service,
        test::TestRequest::get().uri(&format!("/v1/locations/{}", LocationId::new())),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_that_malformed_ids_are_bad_requests() {
    let mut service = MockLocations::new();
    service.expect_get_location_by_id().never();

    let resp = call(
        service,
        test::TestRequest::get().uri("/v1/locations/not-a-uuid"),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(resp).await["error"]["title"], "invalid location id");
}

#[actix_web::test]
async fn test_that_locations_are_listed_a_page_at_a_time() {
    let mut service = MockLocations::new();
    service
        .expect_get_paginated_locations()
        .withf(|_, filters| {
            filters.pagination.cursor == "Beta"
                && filters.pagination.direction == Direction::Next
                && filters.pagination.limit == 2
                && filters.name.as_deref() == Some("a")
        })
        .return_once(|_, _| {
            Ok(CursorPage {
                data: vec![location("Delta"), location("Gamma")],
                limit: 2,
                next_page: Some("Gamma".to_string()),
                previous_page: Some("Delta".to_string()),
            })
        });

    let resp = call(
        service,
        test::TestRequest::get().uri("/v1/locations?cursor=Beta&direction=next&limit=2&name=a"),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["data"]["limit"], 2);
    assert_eq!(body["data"]["next_page"], "Gamma");
    assert_eq!(body["data"]["previous_page"], "Delta");
    assert_eq!(body["data"]["data"][0]["name"], "Delta");
    assert_eq!(body["data"]["data"][1]["name"], "Gamma");
}

#[actix_web::test]
async fn test_that_invalid_filters_are_bad_requests() {
    let mut service = MockLocations::new();
    service.expect_get_paginated_locations().never();

    let resp = call(
        service,
        test::TestRequest::get()
            .uri("/v1/locations?direction=prev")
            .insert_header(("Correlation-Id", "corr-9")),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.headers().get("correlation-id").unwrap(), "corr-9");
    let body = json_body(resp).await;
    assert_eq!(
        body["error"]["details"][0]["message"],
        "if the cursor is empty, the only allowed direction value is 'next'"
    );
    assert_eq!(body["error"]["correlation_id"], "corr-9");
}

#[actix_web::test]
async fn test_that_filter_errors_are_reported_as_the_title() {
    let mut service = MockLocations::new();
    service.expect_get_paginated_locations().never();

    let resp = call(
        service,
        test::TestRequest::get().uri("/v1/locations?direction=next&limit=x"),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert_eq!(body["error"]["title"], "invalid limit value: x");
    assert_eq!(
        body["error"]["details"],
        json!([{ "message": "invalid limit value: x" }])
    );
}
