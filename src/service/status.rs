//! Liveness probe.

use serde_json::json;

use crate::handler::{HandlerError, JsonHandler, JsonReply, JsonRequest};

/// Always answers `{"status": "OK"}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Status;

impl JsonHandler for Status {
    fn handle_json(&self, _request: &JsonRequest<'_>) -> Result<JsonReply, HandlerError> {
        JsonReply::ok(json!({ "status": "OK" }))
    }
}
