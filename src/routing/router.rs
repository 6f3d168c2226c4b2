//! Route registration and dispatch.
//!
//! # Responsibilities
//! - Store templates per HTTP method, in registration order
//! - Dispatch a request to every distinct handler whose template matches
//! - Fall back to the default handler when nothing matched
//!
//! # Design Decisions
//! - Registration order is the only precedence (no specificity ranking)
//! - A handler is invoked at most once per request, compared by identity
//! - Re-registering (method, template) replaces the handler in place
//! - Mutation needs `&mut self`; serving shares the router behind `Arc`

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::handler::{Handler, Json, NotFound, Response, RouteRequest};
use crate::routing::path;
use crate::routing::pattern::Pattern;

/// One or more templates accepted by [`Router::add_route`].
pub trait Patterns {
    fn into_patterns(self) -> Vec<String>;
}

impl Patterns for &str {
    fn into_patterns(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl Patterns for String {
    fn into_patterns(self) -> Vec<String> {
        vec![self]
    }
}

impl Patterns for &[&str] {
    fn into_patterns(self) -> Vec<String> {
        self.iter().map(|p| (*p).to_string()).collect()
    }
}

impl<const N: usize> Patterns for [&str; N] {
    fn into_patterns(self) -> Vec<String> {
        self.iter().map(|p| (*p).to_string()).collect()
    }
}

impl Patterns for Vec<&str> {
    fn into_patterns(self) -> Vec<String> {
        self.into_iter().map(str::to_string).collect()
    }
}

impl Patterns for Vec<String> {
    fn into_patterns(self) -> Vec<String> {
        self
    }
}

struct Registration {
    pattern: Pattern,
    handler: Arc<dyn Handler>,
}

/// Maps (method, path) to handlers.
pub struct Router {
    base_path: String,
    routes: HashMap<String, Vec<Registration>>,
    default_handler: Arc<dyn Handler>,
}

impl Router {
    /// Create an empty router. `base_path` is stripped from every request
    /// path before matching; pass `""` for none.
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            routes: HashMap::new(),
            default_handler: Arc::new(Json(NotFound)),
        }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Register `handler` for `method` under one template or a list of them.
    pub fn add_route(
        &mut self,
        method: impl Into<String>,
        patterns: impl Patterns,
        handler: Arc<dyn Handler>,
    ) -> &mut Self {
        let method = method.into();
        let registrations = self.routes.entry(method.clone()).or_default();

        for source in patterns.into_patterns() {
            match registrations
                .iter_mut()
                .find(|r| r.pattern.as_str() == source)
            {
                Some(existing) => {
                    tracing::debug!(method = %method, pattern = %source, "Replacing route handler");
                    existing.handler = handler.clone();
                }
                None => {
                    tracing::debug!(method = %method, pattern = %source, "Registering route");
                    registrations.push(Registration {
                        pattern: Pattern::parse(source),
                        handler: handler.clone(),
                    });
                }
            }
        }
        self
    }

    /// Replace the fallback used when no template matches.
    pub fn set_default_handler(&mut self, handler: Arc<dyn Handler>) -> &mut Self {
        self.default_handler = handler;
        self
    }

    /// Number of templates registered for `method`.
    pub fn route_count(&self, method: &str) -> usize {
        self.routes.get(method).map_or(0, Vec::len)
    }

    /// Dispatch one request.
    ///
    /// Every distinct handler with a matching template runs once, in
    /// registration order. If none ran, the default handler runs with no
    /// args. Always returns the response the handlers wrote.
    pub fn route(&self, method: &str, raw_path: &str, body: &[u8]) -> Response {
        let normalized = path::normalize(raw_path, &self.base_path);
        let segments: Vec<&str> = path::segments(&normalized).collect();
        let mut response = Response::new();
        let mut invoked: Vec<*const ()> = Vec::new();

        for registration in self.routes.get(method).into_iter().flatten() {
            let Some(args) = registration.pattern.matches(&segments) else {
                continue;
            };

            let identity = Arc::as_ptr(&registration.handler).cast::<()>();
            if invoked.contains(&identity) {
                tracing::trace!(
                    method = %method,
                    path = %normalized,
                    pattern = %registration.pattern,
                    "Handler already invoked, skipping"
                );
                continue;
            }
            invoked.push(identity);

            tracing::debug!(
                method = %method,
                path = %normalized,
                pattern = %registration.pattern,
                args = args.len(),
                "Dispatching request"
            );
            let request = RouteRequest {
                method,
                path: &normalized,
                args: Some(&args),
                body,
            };
            registration.handler.handle(&request, &mut response);
        }

        if invoked.is_empty() {
            tracing::debug!(method = %method, path = %normalized, "No route matched");
            let request = RouteRequest {
                method,
                path: &normalized,
                args: None,
                body,
            };
            self.default_handler.handle(&request, &mut response);
        }

        response
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new("")
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let routes: HashMap<&str, Vec<&str>> = self
            .routes
            .iter()
            .map(|(method, regs)| {
                (
                    method.as_str(),
                    regs.iter().map(|r| r.pattern.as_str()).collect(),
                )
            })
            .collect();
        f.debug_struct("Router")
            .field("base_path", &self.base_path)
            .field("routes", &routes)
            .finish_non_exhaustive()
    }
}
