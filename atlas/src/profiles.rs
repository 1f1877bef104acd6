use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// One city's follower footprint. Deserialization is the only constructor
/// used by the loader, so a profile in memory always has all four fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityProfile {
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub followers: u64,
}

/// Loads the full dataset. A missing file is reported as its own error so
/// startup can distinguish "never provisioned" from "provisioned but broken".
pub fn load_city_profiles(path: &Path) -> Result<Vec<CityProfile>, DataError> {
    if !path.exists() {
        return Err(DataError::MissingDataset {
            path: path.to_path_buf(),
        });
    }

    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::{CityProfile, load_city_profiles};
    use crate::error::DataError;

    #[test]
    fn test_missing_dataset_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = load_city_profiles(&dir.path().join("cities.json"));

        assert!(matches!(result, Err(DataError::MissingDataset { .. })));
    }

    #[test]
    fn test_loads_valid_dataset() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cities.json");
        fs::write(
            &path,
            r#"[{"city": "Lisbon", "latitude": 38.7223, "longitude": -9.1393, "followers": 420}]"#,
        )
        .unwrap();

        let profiles = load_city_profiles(&path).unwrap();
        assert_eq!(
            profiles,
            vec![CityProfile {
                city: "Lisbon".to_string(),
                latitude: 38.7223,
                longitude: -9.1393,
                followers: 420,
            }]
        );
    }

    #[test]
    fn test_rejects_profile_with_missing_field() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cities.json");
        fs::write(&path, r#"[{"city": "Lisbon", "latitude": 38.7223}]"#).unwrap();

        let result = load_city_profiles(&path);
        assert!(matches!(result, Err(DataError::Parse(_))));
    }

    #[test]
    fn test_rejects_mistyped_field() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cities.json");
        fs::write(
            &path,
            r#"[{"city": "Lisbon", "latitude": "north", "longitude": -9.1, "followers": 1}]"#,
        )
        .unwrap();

        assert!(load_city_profiles(&path).is_err());
    }
}
