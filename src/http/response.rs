//! Conversion of the dispatch buffer into an HTTP response.
//!
//! # Design Decisions
//! - Status, headers and body are taken verbatim from what handlers wrote
//! - Handlers that write nothing produce `200` with an empty body

use axum::body::Body;
use axum::response::IntoResponse;

use crate::handler::Response;

impl IntoResponse for Response {
    fn into_response(self) -> axum::response::Response {
        let (status, headers, body) = self.into_parts();
        let mut response = axum::response::Response::new(Body::from(body));
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header::CONTENT_TYPE, HeaderValue, StatusCode};

    #[tokio::test]
    async fn test_into_response_keeps_everything() {
        let mut buffer = Response::new();
        buffer.set_status(StatusCode::BAD_REQUEST);
        buffer.set_header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        buffer.write(b"{}");

        let response = buffer.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"{}");
    }
}
