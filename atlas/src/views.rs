//! Pure derivations over the loaded profiles. Nothing in here touches disk
//! or fails; the handlers serve precomputed results of these functions.

use serde::Serialize;

use crate::profiles::CityProfile;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: (f64, f64) },
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum Entity {
    Feature {
        geometry: Geometry,
        properties: CityProperties,
    },
    FeatureCollection {
        features: Vec<Entity>,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct CityProperties {
    pub city: String,
    pub followers: u64,
}

/// One Point feature per profile. Coordinates are `(longitude, latitude)`,
/// the GeoJSON axis order, not the lat/lon order humans quote.
pub fn build_geojson(profiles: &[CityProfile]) -> Entity {
    Entity::FeatureCollection {
        features: profiles.iter().map(as_feature).collect(),
    }
}

fn as_feature(profile: &CityProfile) -> Entity {
    Entity::Feature {
        geometry: Geometry::Point {
            coordinates: (profile.longitude, profile.latitude),
        },
        properties: CityProperties {
            city: profile.city.clone(),
            followers: profile.followers,
        },
    }
}

/// Table row with the column order the dashboard expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityRow {
    pub city: String,
    pub followers: u64,
    pub latitude: f64,
    pub longitude: f64,
}

/// Profiles ranked by follower count, largest first. The sort is stable, so
/// cities with equal counts keep their dataset order.
pub fn build_city_table(profiles: &[CityProfile]) -> Vec<CityRow> {
    let mut ordered: Vec<&CityProfile> = profiles.iter().collect();
    ordered.sort_by(|a, b| b.followers.cmp(&a.followers));

    ordered
        .into_iter()
        .map(|profile| CityRow {
            city: profile.city.clone(),
            followers: profile.followers,
            latitude: profile.latitude,
            longitude: profile.longitude,
        })
        .collect()
}

pub fn aggregate_total(profiles: &[CityProfile]) -> u64 {
    profiles.iter().map(|profile| profile.followers).sum()
}
