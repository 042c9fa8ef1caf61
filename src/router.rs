use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware::map_response_with_state,
    routing::{get, post},
};

use crate::config::Config;
use crate::db::PersonStorage;
use crate::handlers::{
    create_person_handler, health_handler, method_not_allowed_handler, not_found_handler,
};
use crate::middleware::{StatusMode, apply_status_mode};

#[derive(Clone)]
pub struct CadastroState {
    pub storage: PersonStorage,
    pub expose_db_errors: bool,
    pub status_mode: StatusMode,
    pub body_limit: usize,
}

impl CadastroState {
    pub fn new(storage: PersonStorage, cfg: &Config) -> Self {
        Self {
            storage,
            expose_db_errors: cfg.expose_db_errors,
            status_mode: StatusMode::from_flag(cfg.legacy_status),
            body_limit: cfg.body_limit,
        }
    }
}

pub fn cadastro_router(state: CadastroState) -> Router {
    let status_mode = state.status_mode;
    let body_limit = state.body_limit;

    Router::new()
        .route("/add_task", post(create_person_handler))
        .route("/add_task.php", post(create_person_handler))
        .route("/health", get(health_handler))
        .fallback(not_found_handler)
        .method_not_allowed_fallback(method_not_allowed_handler)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(map_response_with_state(status_mode, apply_status_mode))
        .with_state(state)
}
