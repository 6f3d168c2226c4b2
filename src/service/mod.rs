//! Example service: a status probe and a mocked artefact resource.
//!
//! # Routes
//! - `GET /status`
//! - `GET /artefact/{id}`
//! - `POST /artefact`
//! - `PUT /artefact/{id}`
//! - `DELETE /artefact/{id}`

pub mod artefact;
pub mod status;

use std::sync::Arc;

use crate::handler::Json;
use crate::routing::Router;

pub use artefact::{CreateArtefact, DeleteArtefact, GetArtefact, UpdateArtefact};
pub use status::Status;

/// Build the example router under `base_path`.
pub fn router(base_path: impl Into<String>) -> Router {
    let mut router = Router::new(base_path);
    router
        .add_route("GET", "/status", Arc::new(Json(Status)))
        .add_route("GET", "/artefact/{id}", Arc::new(Json(GetArtefact)))
        .add_route("POST", "/artefact", Arc::new(Json(CreateArtefact)))
        .add_route("DELETE", "/artefact/{id}", Arc::new(Json(DeleteArtefact)))
        .add_route("PUT", "/artefact/{id}", Arc::new(Json(UpdateArtefact)));
    router
}
