use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};
use tracing::{error, info};

use crate::db::models::CreatedPerson;
use crate::middleware::PersonPayload;
use crate::{CadastroError, router::CadastroState};

/// POST /add_task -> inserts one row into `pessoas`.
pub async fn create_person_handler(
    State(state): State<CadastroState>,
    PersonPayload(person): PersonPayload,
) -> Result<(StatusCode, Json<CreatedPerson>), CadastroError> {
    let record = state.storage.insert(person).await.map_err(|e| {
        error!(error = %e, "failed to insert person");
        e.into_public(state.expose_db_errors)
    })?;

    info!(id = record.id, "person created");
    Ok((StatusCode::CREATED, Json(record.into())))
}

/// GET /health -> checks the database answers.
pub async fn health_handler(
    State(state): State<CadastroState>,
) -> Result<Json<Value>, CadastroError> {
    state
        .storage
        .ping()
        .await
        .inspect_err(|e| error!(error = %e, "health check failed"))?;
    Ok(Json(json!({ "status": "ok" })))
}

/// Unknown paths answer with the same `{"error": ...}` body as everything else.
pub async fn not_found_handler() -> CadastroError {
    CadastroError::NotFound
}

pub async fn method_not_allowed_handler() -> CadastroError {
    CadastroError::MethodNotAllowed
}
