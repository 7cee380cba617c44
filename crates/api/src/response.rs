//! Shared response payloads.

use placement_core::entity::EntityKind;
use placement_core::types::DbId;
use serde::Serialize;

/// `{ "message": ..., "id": ... }` returned by every create endpoint.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    pub id: DbId,
}

impl CreatedResponse {
    /// Build the confirmation for a freshly inserted `kind` row.
    pub fn new(kind: EntityKind, id: DbId) -> Self {
        tracing::info!(entity = %kind, id, "Entity created");
        Self {
            message: kind.created_message(),
            id,
        }
    }
}
