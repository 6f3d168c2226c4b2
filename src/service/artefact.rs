//! Mocked artefact resource.
//!
//! Nothing is stored: every endpoint echoes what it was given.

use serde::Serialize;

use crate::handler::{HandlerError, JsonHandler, JsonReply, JsonRequest};

const MOCK_DESCRIPTION: &str = "mocked artefact";
const CREATED_ID: u64 = 123;

/// Artefact id: assigned on create, taken from the path otherwise.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum ArtefactId<'a> {
    Assigned(u64),
    Path(&'a str),
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Artefact<'a> {
    pub id: ArtefactId<'a>,
    pub description: &'a str,
}

fn description<'r>(request: &'r JsonRequest<'_>) -> Result<&'r str, HandlerError> {
    request.str_field(&["artefact", "description"])
}

/// `GET /artefact/{id}`
#[derive(Debug, Clone, Copy, Default)]
pub struct GetArtefact;

impl JsonHandler for GetArtefact {
    fn handle_json(&self, request: &JsonRequest<'_>) -> Result<JsonReply, HandlerError> {
        let artefact = Artefact {
            id: ArtefactId::Path(request.arg("id")?),
            description: MOCK_DESCRIPTION,
        };
        JsonReply::ok(serde_json::json!({ "artefact": artefact }))
    }
}

/// `POST /artefact`
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateArtefact;

impl JsonHandler for CreateArtefact {
    fn handle_json(&self, request: &JsonRequest<'_>) -> Result<JsonReply, HandlerError> {
        let artefact = Artefact {
            id: ArtefactId::Assigned(CREATED_ID),
            description: description(request)?,
        };
        JsonReply::ok(serde_json::json!({ "created_artefact": artefact }))
    }
}

/// `PUT /artefact/{id}`
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateArtefact;

impl JsonHandler for UpdateArtefact {
    fn handle_json(&self, request: &JsonRequest<'_>) -> Result<JsonReply, HandlerError> {
        let artefact = Artefact {
            id: ArtefactId::Path(request.arg("id")?),
            description: description(request)?,
        };
        JsonReply::ok(serde_json::json!({ "created_artefact": artefact }))
    }
}

/// `DELETE /artefact/{id}`
#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteArtefact;

impl JsonHandler for DeleteArtefact {
    fn handle_json(&self, request: &JsonRequest<'_>) -> Result<JsonReply, HandlerError> {
        let artefact = Artefact {
            id: ArtefactId::Path(request.arg("id")?),
            description: MOCK_DESCRIPTION,
        };
        JsonReply::ok(serde_json::json!({ "deleted_artefact": artefact }))
    }
}
