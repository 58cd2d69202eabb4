use crate::config::AppConfig;
use axum::{extract::State, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct HomeResponse {
    pub message: String,
}

/// Placeholder landing route.
pub async fn home(State(config): State<AppConfig>) -> Json<HomeResponse> {
    Json(HomeResponse {
        message: format!("Welcome to {}", config.app_name),
    })
}
