//! Per-request tracing span.
//!
//! Opens a `request` span carrying `trace_id`, `method` and `path` so every
//! handler and engine event inherits them. Once the response is ready the
//! span also gets the matched route pattern, the decoded `{player_name}`
//! segment and the status code, which show up on span-close events.
//!
//! Reads the trace id `RequestTrace` stores in the request extensions, so it
//! must run inside it (actix runs the last `.wrap` first):
//!
//! ```text
//! App::new()
//!     .wrap(TraceSpan)
//!     .wrap(RequestTrace)
//! ```

use std::future::{ready, Ready};

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::field::Empty;
use tracing::{info_span, Instrument, Span};

use crate::extractors::player_name::route_player;

#[derive(Clone, Default)]
pub struct TraceSpan;

impl<S, B> Transform<S, ServiceRequest> for TraceSpan
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TraceSpanMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceSpanMiddleware { service }))
    }
}

pub struct TraceSpanMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TraceSpanMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = req
            .extensions()
            .get::<String>()
            .cloned()
            .unwrap_or_else(|| "missing-trace-id".to_string());

        let span = info_span!(
            "request",
            trace_id = %trace_id,
            method = %req.method(),
            path = %req.path(),
            http.route = Empty,
            player = Empty,
            status = Empty,
        );

        let fut = self.service.call(req).instrument(span.clone());

        Box::pin(async move {
            let result = fut.await;
            if let Ok(res) = &result {
                record_outcome(&span, res);
            }
            result
        })
    }
}

fn record_outcome<B>(span: &Span, res: &ServiceResponse<B>) {
    let req = res.request();
    if let Some(route) = req.match_pattern() {
        span.record("http.route", route.as_str());
    }
    if let Some(player) = route_player(req) {
        span.record("player", player.as_str());
    }
    span.record("status", res.status().as_u16());
}
