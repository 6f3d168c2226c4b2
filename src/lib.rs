//! Minimalist REST request router.
//!
//! Register handlers under `/`-separated templates with `{name}` parameters,
//! then dispatch `(method, path, body)` triples: every distinct matching
//! handler runs once, in registration order, and a default handler covers
//! the rest.

pub mod config;
pub mod handler;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod service;

pub use config::ServerConfig;
pub use handler::{Handler, Response, RouteRequest};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{MatchArgs, Router};
