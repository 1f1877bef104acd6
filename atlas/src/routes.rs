use std::sync::Arc;

use axum::{Json, extract::State};

use crate::state::{AppState, DashboardView};

pub async fn dashboard_handler(State(state): State<Arc<AppState>>) -> Json<DashboardView> {
    Json(state.dashboard.clone())
}
