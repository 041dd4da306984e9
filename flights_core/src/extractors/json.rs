//! JSON and query extractors that reject with the response envelope

use crate::error::AppError;
use axum::{
    async_trait,
    body::Body,
    extract::{
        rejection::JsonRejection,
        FromRequest, FromRequestParts, Query, Request,
    },
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

/// `Json<T>` whose failures render as a 400 envelope instead of plain text.
pub struct EnvelopeJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for EnvelopeJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(EnvelopeJson(value)),
            Err(rejection) => Err(AppError::BadRequest(describe_json_rejection(&rejection))),
        }
    }
}

fn describe_json_rejection(rejection: &JsonRejection) -> String {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            "Expected request with `Content-Type: application/json`".to_string()
        }
        JsonRejection::JsonSyntaxError(err) => {
            let detail = err.body_text();
            if detail.contains("EOF while parsing") {
                "Empty or incomplete JSON request".to_string()
            } else {
                format!("Invalid JSON format: {}", detail)
            }
        }
        JsonRejection::JsonDataError(err) => err.body_text(),
        other => format!("Failed to parse JSON request: {}", other.body_text()),
    }
}

/// `Query<T>` counterpart of [`EnvelopeJson`].
pub struct EnvelopeQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for EnvelopeQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(EnvelopeQuery(value)),
            Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
        }
    }
}
