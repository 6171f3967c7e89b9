use std::future::Future;

use actix_web::dev::{Service, ServiceRequest, ServiceResponse};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::{HttpMessage, HttpRequest};
use shared_kernel::correlation::{CorrelationId, CORRELATION_ID_HEADER};

/// Per request data that handlers pass down to the use cases.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub correlation_id: CorrelationId,
}

impl From<&HttpRequest> for RequestContext {
    fn from(req: &HttpRequest) -> Self {
        let correlation_id = req
            .extensions()
            .get::<CorrelationId>()
            .cloned()
            .unwrap_or_else(|| CorrelationId::from_header(header_value(req.headers())));
        RequestContext { correlation_id }
    }
}

fn header_value(headers: &actix_web::http::header::HeaderMap) -> Option<&str> {
    headers
        .get(CORRELATION_ID_HEADER)
        .and_then(|value| value.to_str().ok())
}

/// Stores the caller's correlation id (or a fresh one) in the request
/// extensions and echoes it on the response.
pub fn propagate_correlation_id<S, B>(
    req: ServiceRequest,
    srv: &S,
) -> impl Future<Output = Result<ServiceResponse<B>, actix_web::Error>>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
{
    let correlation_id = CorrelationId::from_header(header_value(req.headers()));
    req.extensions_mut().insert(correlation_id.clone());
    let response = srv.call(req);

    async move {
        let mut response = response.await?;
        if let Ok(value) = HeaderValue::from_str(correlation_id.as_ref()) {
            response
                .headers_mut()
                .insert(HeaderName::from_static("correlation-id"), value);
        }
        Ok(response)
    }
}
