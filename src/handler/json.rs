//! JSON request/response handlers.
//!
//! # Responsibilities
//! - Decode the raw body as JSON (leniently: bad or empty input is `null`)
//! - Run the endpoint logic, which returns an explicit `Result`
//! - Emit `Content-Type: application/json`, the reply status and payload
//! - Convert any [`HandlerError`] into a bare 500
//!
//! # Design Decisions
//! - Endpoint errors never leave [`Json::handle`]
//! - A reply without payload writes no body

use axum::http::{header::CONTENT_TYPE, HeaderValue, StatusCode};
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

use crate::handler::{Handler, Response, RouteRequest};
use crate::routing::MatchArgs;

/// Failures inside a JSON endpoint.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// A required field is absent from the request body.
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// A field is present but unusable.
    #[error("invalid field {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// The reply could not be encoded.
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Decoded view of a request for JSON endpoints.
#[derive(Debug)]
pub struct JsonRequest<'a> {
    pub method: &'a str,
    pub path: &'a str,
    pub args: Option<&'a MatchArgs>,
    /// Request body as JSON, `Value::Null` when empty or malformed.
    pub data: Value,
}

impl JsonRequest<'_> {
    /// Look up a captured path parameter.
    pub fn arg(&self, name: &'static str) -> Result<&str, HandlerError> {
        self.args
            .and_then(|args| args.get(name))
            .ok_or(HandlerError::MissingField(name))
    }

    /// Walk the body along `path` and return the string found there.
    pub fn str_field(&self, path: &[&'static str]) -> Result<&str, HandlerError> {
        let mut value = &self.data;
        for &key in path {
            value = value.get(key).ok_or(HandlerError::MissingField(key))?;
        }
        let field = path.last().copied().unwrap_or("body");
        value.as_str().ok_or_else(|| HandlerError::InvalidField {
            field,
            reason: "expected a string".to_string(),
        })
    }
}

/// Outcome of a JSON endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonReply {
    pub status: StatusCode,
    pub payload: Option<Value>,
}

impl JsonReply {
    /// 200 with `payload`.
    pub fn ok(payload: impl Serialize) -> Result<Self, HandlerError> {
        Self::with_status(StatusCode::OK, payload)
    }

    pub fn with_status(status: StatusCode, payload: impl Serialize) -> Result<Self, HandlerError> {
        Ok(Self {
            status,
            payload: Some(serde_json::to_value(payload)?),
        })
    }

    /// Status only, no body.
    pub fn empty(status: StatusCode) -> Self {
        Self {
            status,
            payload: None,
        }
    }
}

/// Endpoint logic that speaks JSON.
pub trait JsonHandler: Send + Sync {
    fn handle_json(&self, request: &JsonRequest<'_>) -> Result<JsonReply, HandlerError>;
}

/// Adapts a [`JsonHandler`] to the router's [`Handler`] capability.
#[derive(Debug, Clone, Default)]
pub struct Json<H>(pub H);

impl<H: JsonHandler> Handler for Json<H> {
    fn handle(&self, request: &RouteRequest<'_>, response: &mut Response) {
        let json_request = JsonRequest {
            method: request.method,
            path: request.path,
            args: request.args,
            data: serde_json::from_slice(request.body).unwrap_or(Value::Null),
        };

        let reply = self.0.handle_json(&json_request).unwrap_or_else(|err| {
            tracing::warn!(
                method = %request.method,
                path = %request.path,
                error = %err,
                "Handler failed"
            );
            JsonReply::empty(StatusCode::INTERNAL_SERVER_ERROR)
        });

        response.set_header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        response.set_status(reply.status);
        if let Some(payload) = reply.payload {
            match serde_json::to_vec(&payload) {
                Ok(bytes) => response.write(&bytes),
                Err(err) => {
                    tracing::warn!(error = %err, "Failed to encode reply");
                    response.set_status(StatusCode::INTERNAL_SERVER_ERROR);
                }
            }
        }
    }
}

/// Built-in fallback: 400 naming the unmatched method and path.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotFound;

impl JsonHandler for NotFound {
    fn handle_json(&self, request: &JsonRequest<'_>) -> Result<JsonReply, HandlerError> {
        JsonReply::with_status(
            StatusCode::BAD_REQUEST,
            json!({
                "error": format!(
                    "No handler matches path {} for HTTP method {}.",
                    request.path, request.method
                )
            }),
        )
    }
}
