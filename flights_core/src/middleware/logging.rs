//! Request tracing layer

use axum::body::Body;
use http::{Request, Response, StatusCode};
use std::time::Duration;
use tower_http::classify::{ServerErrorsAsFailures, ServerErrorsFailureClass, SharedClassifier};
use tower_http::trace::{
    DefaultOnBodyChunk, DefaultOnEos, MakeSpan, OnFailure, OnRequest, OnResponse, TraceLayer,
};
use tracing::{info_span, Span};

/// One `http_request` span per request, closed with a line whose level
/// follows the status class.
pub fn logging_layer() -> TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    impl MakeSpan<Body> + Clone,
    impl OnRequest<Body> + Clone,
    impl OnResponse<Body> + Clone,
    DefaultOnBodyChunk,
    DefaultOnEos,
    impl OnFailure<ServerErrorsFailureClass> + Clone,
> {
    TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            info_span!(
                "http_request",
                method = %request.method(),
                path = %request.uri().path(),
                query = request.uri().query().unwrap_or(""),
            )
        })
        .on_request(|_request: &Request<Body>, _span: &Span| {
            tracing::debug!("request received");
        })
        .on_response(|response: &Response<Body>, latency: Duration, _span: &Span| {
            log_completion(response.status(), latency);
        })
        .on_failure(|error: ServerErrorsFailureClass, latency: Duration, _span: &Span| {
            tracing::error!(
                latency_ms = latency.as_millis() as u64,
                error = %error,
                "request failed"
            );
        })
}

fn log_completion(status: StatusCode, latency: Duration) {
    let status_code = status.as_u16();
    let latency_ms = latency.as_millis() as u64;

    if status.is_server_error() {
        tracing::error!(status = status_code, latency_ms, "server error response");
    } else if status.is_client_error() {
        tracing::warn!(status = status_code, latency_ms, "client error response");
    } else {
        tracing::info!(status = status_code, latency_ms, "request completed");
    }
}
