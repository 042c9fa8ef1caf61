use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

pub const MISSING_NAME_MESSAGE: &str = "O nome é obrigatório";
pub const DATABASE_ERROR_MESSAGE: &str = "Erro ao gravar no banco de dados";
pub const QUERY_TIMEOUT_MESSAGE: &str = "Tempo limite da consulta excedido";
pub const NOT_FOUND_MESSAGE: &str = "Rota não encontrada";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Método não permitido";

#[derive(Debug, ThisError)]
pub enum CadastroError {
    #[error("{}", MISSING_NAME_MESSAGE)]
    MissingName,

    #[error("{reason}")]
    MalformedBody { status: StatusCode, reason: String },

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    /// Driver message that is allowed to reach the client verbatim.
    #[error("{0}")]
    Persistence(String),

    /// SQLite gave up waiting on a lock; the statement was not applied.
    #[error("{}", QUERY_TIMEOUT_MESSAGE)]
    QueryTimeout,

    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,

    #[error("{}", METHOD_NOT_ALLOWED_MESSAGE)]
    MethodNotAllowed,
}

/// Startup failure of the connection provider. Never turned into a response.
#[derive(Debug, ThisError)]
#[error("Erro na conexão com o banco de dados: {0}")]
pub struct ConnectError(#[from] pub SqlxError);

impl CadastroError {
    /// Swap a database error for its raw driver message when `expose` is set.
    pub fn into_public(self, expose: bool) -> Self {
        match self {
            CadastroError::Database(e) if expose => CadastroError::Persistence(e.to_string()),
            other => other,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            CadastroError::MissingName => StatusCode::BAD_REQUEST,
            CadastroError::NotFound => StatusCode::NOT_FOUND,
            CadastroError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            CadastroError::MalformedBody { status, .. } => *status,
            CadastroError::Database(_)
            | CadastroError::Persistence(_)
            | CadastroError::QueryTimeout => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CadastroError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let error = match self {
            CadastroError::Database(_) => DATABASE_ERROR_MESSAGE.to_string(),
            CadastroError::Persistence(message) => message,
            other => other.to_string(),
        };
        (status, Json(ApiErrorResponse { error })).into_response()
    }
}

/// Body of every failed request: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
}
