use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::{
    config::Config,
    error::DataError,
    profiles::load_city_profiles,
    views::{CityRow, Entity, aggregate_total, build_city_table, build_geojson},
};

/// Everything the dashboard page needs in one payload.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub geojson: Entity,
    pub city_table: Vec<CityRow>,
    pub total_followers: u64,
    pub mapbox_token: String,
}

/// Immutable request context. The dataset is read once here; reloading it
/// means restarting the process.
pub struct AppState {
    pub config: Config,
    pub dashboard: DashboardView,
}

impl AppState {
    pub fn new() -> Result<Arc<Self>, DataError> {
        let config = Config::load();

        let profiles = load_city_profiles(&config.data_path)?;
        info!("Loaded {} city profiles", profiles.len());

        let dashboard = DashboardView {
            geojson: build_geojson(&profiles),
            city_table: build_city_table(&profiles),
            total_followers: aggregate_total(&profiles),
            mapbox_token: config.mapbox_token.clone(),
        };

        Ok(Arc::new(Self { config, dashboard }))
    }
}
