// backend/src/routes/health.rs

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResp {
    pub status: &'static str,
    pub version: &'static str,
    pub target_year: i32,
    pub year_closed: bool,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResp> {
    Json(HealthResp {
        status: "ok",
        version: "v1",
        target_year: state.season.target_year,
        year_closed: state.season.is_year_closed,
    })
}
