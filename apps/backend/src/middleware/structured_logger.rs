use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

use crate::extractors::player_name::route_player;

/// Emits one `request_completed` event per request, levelled by status class
/// and tagged with the matched route pattern and the player it addressed.
pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().to_string();
        let path = req.path().to_string();
        let trace_id = req
            .extensions()
            .get::<String>()
            .cloned()
            .unwrap_or_else(|| "unknown".to_string());

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            // Routing has run by now, so the matched pattern and segments are known.
            let (status, route, player) = match &result {
                Ok(res) => (
                    res.status(),
                    res.request().match_pattern(),
                    route_player(res.request()),
                ),
                Err(err) => (err.as_response_error().status_code(), None, None),
            };

            let line = RequestLine {
                method: &method,
                path: &path,
                route: route.as_deref().unwrap_or("unmatched"),
                player: player.as_deref().unwrap_or("-"),
                status: status.as_u16(),
                duration_us: start.elapsed().as_micros() as u64,
                trace_id: &trace_id,
            };
            line.emit(status);

            result
        })
    }
}

/// Fields of one `request_completed` event.
struct RequestLine<'a> {
    method: &'a str,
    path: &'a str,
    route: &'a str,
    player: &'a str,
    status: u16,
    duration_us: u64,
    trace_id: &'a str,
}

impl RequestLine<'_> {
    fn emit(&self, status: StatusCode) {
        macro_rules! log_at {
            ($level:ident) => {
                $level!(
                    http.method = %self.method,
                    url.path = %self.path,
                    http.route = %self.route,
                    player = %self.player,
                    http.status_code = self.status,
                    duration_us = self.duration_us,
                    trace_id = %self.trace_id,
                    message = "request_completed"
                )
            };
        }

        if status.is_server_error() {
            log_at!(error);
        } else if status.is_client_error() {
            log_at!(warn);
        } else {
            log_at!(info);
        }
    }
}
