use crate::model::{Coordinate, TripError};
use std::{collections::HashMap, path::Path};

/// read-only mapping from location name to coordinate, loaded once at the
/// start of a plotting run and owned by it. lookups are exact,
/// case-sensitive string matches. never mutated or persisted back.
#[derive(Debug, Clone, Default)]
pub struct CoordinateCache {
    coordinates: HashMap<String, Coordinate>,
}

impl From<HashMap<String, Coordinate>> for CoordinateCache {
    fn from(value: HashMap<String, Coordinate>) -> Self {
        Self { coordinates: value }
    }
}

impl CoordinateCache {
    /// loads the cache from a JSON document mapping location names to
    /// [latitude, longitude] pairs. a missing or undecodable file is fatal
    /// to the run.
    pub fn from_file(path: &Path) -> Result<CoordinateCache, TripError> {
        let contents = std::fs::read_to_string(path).map_err(|e| TripError::CacheLoadError {
            path: path.to_string_lossy().to_string(),
            message: format!("failure reading file: {e}"),
        })?;
        let coordinates: HashMap<String, Coordinate> =
            serde_json::from_str(&contents).map_err(|e| TripError::CacheLoadError {
                path: path.to_string_lossy().to_string(),
                message: format!("failure decoding file: {e}"),
            })?;
        log::info!(
            "loaded {} cached coordinates from {}",
            coordinates.len(),
            path.to_string_lossy()
        );
        Ok(CoordinateCache { coordinates })
    }

    pub fn get(&self, name: &str) -> Option<Coordinate> {
        self.coordinates.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }
}
