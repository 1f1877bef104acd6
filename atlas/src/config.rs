use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    pub mapbox_token: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("ATLAS_PORT", "8000"),
            data_path: try_load("ATLAS_DATA", "data/cities.json"),
            // Empty token means the frontend falls back to a tokenless view.
            mapbox_token: env::var("MAPBOX_TOKEN").unwrap_or_default(),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
