use axum::{extract::State, http::StatusCode, response::Response};

/// Whether responses keep their real status or are flattened to 200.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusMode {
    #[default]
    Standard,
    /// Every response is 200; clients inspect the `error` key.
    Legacy,
}

impl StatusMode {
    pub fn from_flag(legacy: bool) -> Self {
        if legacy { Self::Legacy } else { Self::Standard }
    }
}

pub async fn apply_status_mode(State(mode): State<StatusMode>, mut response: Response) -> Response {
    if mode == StatusMode::Legacy {
        *response.status_mut() = StatusCode::OK;
    }
    response
}
