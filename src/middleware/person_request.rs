use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};

use crate::db::models::{CreatePersonRequest, NewPerson};
use crate::error::CadastroError;

/// Validated body of a create request.
///
/// The body is decoded regardless of `Content-Type`. Size is bounded by the
/// router's `DefaultBodyLimit`.
#[derive(Debug)]
pub struct PersonPayload(pub NewPerson);

impl<S> FromRequest<S> for PersonPayload
where
    S: Send + Sync,
{
    type Rejection = CadastroError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await.map_err(|rejection| {
            CadastroError::MalformedBody {
                status: rejection.status(),
                reason: rejection.body_text(),
            }
        })?;

        let request = parse_body(&body)?;
        Ok(PersonPayload(request.validate()?))
    }
}

fn parse_body(body: &[u8]) -> Result<CreatePersonRequest, CadastroError> {
    serde_json::from_slice(body).map_err(|e| CadastroError::MalformedBody {
        status: StatusCode::BAD_REQUEST,
        reason: format!("Corpo JSON inválido: {e}"),
    })
}
