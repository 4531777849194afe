//! Request ID middleware
//!
//! Tags every request with an `x-request-id`, reusing the caller's value when
//! it is present, and echoes it on the response.

use crate::utils::generate_request_id;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::header::{HeaderName, HeaderValue};
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use tracing::{Instrument, debug, info_span};

/// Header carrying the request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

const MAX_INBOUND_ID_LEN: usize = 128;

/// Request ID middleware for Actix-web
pub struct RequestIdMiddleware;

impl<S, B> Transform<S, ServiceRequest> for RequestIdMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RequestIdMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestIdMiddlewareService { service }))
    }
}

/// Service implementation for request ID middleware
pub struct RequestIdMiddlewareService<S> {
    service: S,
}

fn inbound_request_id(req: &ServiceRequest) -> Option<HeaderValue> {
    let value = req.headers().get(REQUEST_ID_HEADER)?;
    let text = value.to_str().ok()?;
    (!text.is_empty() && text.len() <= MAX_INBOUND_ID_LEN).then(|| value.clone())
}

impl<S, B> Service<ServiceRequest> for RequestIdMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        let header = HeaderName::from_static(REQUEST_ID_HEADER);
        let request_id = inbound_request_id(&req).unwrap_or_else(|| {
            HeaderValue::from_str(&generate_request_id())
                .unwrap_or_else(|_| HeaderValue::from_static("invalid"))
        });

        req.headers_mut().insert(header.clone(), request_id.clone());

        let span = info_span!(
            "request",
            request_id = request_id.to_str().unwrap_or_default(),
            method = %req.method(),
            path = %req.path()
        );
        debug!(parent: &span, "Processing request");

        let fut = self.service.call(req);
        Box::pin(
            async move {
                let mut res = fut.await?;
                res.headers_mut().insert(header, request_id);
                Ok(res)
            }
            .instrument(span),
        )
    }
}
