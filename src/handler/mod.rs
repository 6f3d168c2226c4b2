//! Handler capability.
//!
//! # Data Flow
//! ```text
//! Router::route
//!     → RouteRequest (method, normalized path, args, raw body)
//!     → Handler::handle (writes into the per-request Response)
//!     → Response handed back to the serving layer
//! ```
//!
//! # Design Decisions
//! - Handlers are infallible from the router's point of view; faults are
//!   turned into a terminal response inside the handler
//! - `args` is `None` only for the default handler
//! - Handlers are shared (`Arc<dyn Handler>`), never owned by a route

pub mod json;

use axum::http::{header::HeaderName, HeaderMap, HeaderValue, StatusCode};

use crate::routing::MatchArgs;

pub use json::{HandlerError, Json, JsonHandler, JsonReply, JsonRequest, NotFound};

/// What a handler sees of a request.
#[derive(Debug, Clone, Copy)]
pub struct RouteRequest<'a> {
    pub method: &'a str,
    /// Normalized path (base path removed).
    pub path: &'a str,
    /// Captures from the matched template, `None` on fallback.
    pub args: Option<&'a MatchArgs>,
    pub body: &'a [u8],
}

/// A request handler.
pub trait Handler: Send + Sync {
    /// Handle one request. Must not panic on bad input; errors are written
    /// into `response`.
    fn handle(&self, request: &RouteRequest<'_>, response: &mut Response);
}

impl<F> Handler for F
where
    F: Fn(&RouteRequest<'_>, &mut Response) + Send + Sync,
{
    fn handle(&self, request: &RouteRequest<'_>, response: &mut Response) {
        self(request, response)
    }
}

/// Response buffer shared by every handler invoked for one request.
///
/// The last status and header values written win; body writes append.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl Response {
    pub fn new() -> Self {
        Self {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: Vec::new(),
        }
    }

    pub fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }

    pub fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }

    pub fn write(&mut self, bytes: &[u8]) {
        self.body.extend_from_slice(bytes);
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn into_parts(self) -> (StatusCode, HeaderMap, Vec<u8>) {
        (self.status, self.headers, self.body)
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::new()
    }
}
