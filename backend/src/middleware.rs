use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};
use actix_web::HttpMessage;
use futures_util::future::{ready, LocalBoxFuture, Ready};
use std::rc::Rc;
use std::task::{Context, Poll};
use std::time::Instant;
use log::{info, warn, error};
use actix_web::http::header::{HeaderName, HeaderValue};
use uuid::Uuid;

use crate::config::CorsConfig;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Correlation id of the current request, stored in the request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

/// Reuses a caller-supplied id when it is a sane header value
fn request_id_for(req: &ServiceRequest) -> String {
    req.headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty() && v.len() <= 128)
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

/// One log line per request, levelled by status class
pub struct Logger;

impl<S, B> Transform<S, ServiceRequest> for Logger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = LoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(LoggerMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct LoggerMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for LoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let svc = self.service.clone();
        let start_time = Instant::now();
        let method = req.method().clone();
        let uri = req.uri().clone();
        let peer_addr = req
            .peer_addr()
            .map(|addr| addr.to_string())
            .unwrap_or_else(|| "unknown".to_string());

        let correlation_id = request_id_for(&req);
        req.extensions_mut().insert(RequestId(correlation_id.clone()));

        Box::pin(async move {
            let result = svc.call(req).await;
            let millis = start_time.elapsed().as_millis();

            let mut res = match result {
                Ok(res) => res,
                Err(e) => {
                    // Errors raised by inner middleware (e.g. auth) never become a response here
                    let status = e.as_response_error().status_code().as_u16();
                    warn!(
                        "request_id={} {} {} {} {}ms {} error='{}'",
                        correlation_id, method, uri, status, millis, peer_addr, e
                    );
                    return Err(e);
                }
            };

            if let Ok(header_value) = HeaderValue::try_from(correlation_id.as_str()) {
                res.headers_mut()
                    .insert(HeaderName::from_static(REQUEST_ID_HEADER), header_value);
            }

            let status_code = res.status().as_u16();
            if status_code >= 500 {
                error!("request_id={} {} {} {} {}ms {}", correlation_id, method, uri, status_code, millis, peer_addr);
            } else if status_code >= 400 {
                warn!("request_id={} {} {} {} {}ms {}", correlation_id, method, uri, status_code, millis, peer_addr);
            } else {
                info!("request_id={} {} {} {} {}ms {}", correlation_id, method, uri, status_code, millis, peer_addr);
            }

            Ok(res)
        })
    }
}

pub fn cors_middleware(config: &CorsConfig) -> actix_cors::Cors {
    config.allowed_origins.iter().fold(
        actix_cors::Cors::default()
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::ACCEPT,
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::AUTHORIZATION,
            ])
            .expose_headers(vec![HeaderName::from_static(REQUEST_ID_HEADER)])
            .supports_credentials()
            .max_age(3600),
        |cors, origin| cors.allowed_origin(origin),
    )
}
