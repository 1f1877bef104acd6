use std::sync::Arc;

use axum::{
    Form, Json,
    extract::{Multipart, Path, State},
    response::Redirect,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    error::AppError,
    import::{merge_handles, parse_export},
    model::FollowerRecord,
    state::AppState,
    store::update_follower,
    views::{CityGroup, group_by_city, in_city, located, parse_tags},
};

/// Access token for the `/map` tiles. Baked in: this is a single-operator
/// tool and the token is scoped to public styles only.
pub const MAP_ACCESS_TOKEN: &str = "pk.replace-with-your-mapbox-token";

#[derive(Debug, Deserialize)]
pub struct UpdateForm {
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Serialize)]
pub struct MapView {
    pub mapbox_token: &'static str,
    pub followers: Vec<FollowerRecord>,
}

pub async fn followers_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<FollowerRecord>>, AppError> {
    Ok(Json(state.store.load()?))
}

pub async fn import_handler(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Redirect, AppError> {
    let mut payload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            payload = Some(field.bytes().await?);
            break;
        }
    }
    let payload = payload.ok_or(AppError::MissingFile)?;

    // Parse before touching the store; a bad export leaves it untouched.
    let handles = parse_export(&payload)?;

    let _guard = state.write_lock.lock().await;
    let mut records = state.store.load()?;
    let added = merge_handles(&mut records, handles);
    state.store.save(&records)?;
    info!("Imported {added} new followers, {} total", records.len());

    Ok(Redirect::to("/"))
}

pub async fn update_handler(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
    Form(form): Form<UpdateForm>,
) -> Result<Redirect, AppError> {
    let _guard = state.write_lock.lock().await;
    let mut records = state.store.load()?;

    // An unknown username falls through; the store is rewritten as-is.
    let matched = update_follower(
        &mut records,
        &username,
        form.location,
        parse_tags(&form.tags),
        form.notes,
    );
    state.store.save(&records)?;

    if matched {
        info!("Updated follower {username}");
    } else {
        info!("No follower named {username}, nothing updated");
    }

    Ok(Redirect::to("/"))
}

pub async fn map_handler(State(state): State<Arc<AppState>>) -> Result<Json<MapView>, AppError> {
    let records = state.store.load()?;

    Ok(Json(MapView {
        mapbox_token: MAP_ACCESS_TOKEN,
        followers: located(&records),
    }))
}

pub async fn stats_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CityGroup>>, AppError> {
    let records = state.store.load()?;

    Ok(Json(group_by_city(&records)))
}

pub async fn city_handler(
    State(state): State<Arc<AppState>>,
    Path(city): Path<String>,
) -> Result<Json<Vec<FollowerRecord>>, AppError> {
    let records = state.store.load()?;

    Ok(Json(in_city(&records, &city)))
}
