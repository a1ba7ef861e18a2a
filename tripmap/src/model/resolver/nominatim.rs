use super::GeocodingService;
use crate::model::{Coordinate, TripError};
use serde::Deserialize;

pub const NOMINATIM_SEARCH_URL: &str = "https://nominatim.openstreetmap.org/search";

/// Nominatim requires an identifying user agent on every request.
const USER_AGENT: &str = "tripmap_planner";

/// geocoder backed by the public Nominatim search API. issues one blocking
/// GET per lookup, taking the first search result. no timeout and no
/// retries; an unresponsive service blocks the run.
pub struct NominatimGeocoder {
    client: reqwest::blocking::Client,
    search_url: String,
}

/// the subset of a Nominatim search result this tool consumes. the API
/// serializes coordinates as decimal strings.
#[derive(Debug, Deserialize)]
struct NominatimRecord {
    lat: String,
    lon: String,
}

impl NominatimGeocoder {
    pub fn new() -> Result<NominatimGeocoder, TripError> {
        Self::with_search_url(NOMINATIM_SEARCH_URL)
    }

    pub fn with_search_url(search_url: &str) -> Result<NominatimGeocoder, TripError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                TripError::GeocodingService(format!("failure building HTTP client: {e}"))
            })?;
        Ok(NominatimGeocoder {
            client,
            search_url: String::from(search_url),
        })
    }

    fn parse_coordinate(record: &NominatimRecord) -> Result<Coordinate, TripError> {
        let latitude = record.lat.parse::<f64>().map_err(|e| {
            TripError::GeocodingService(format!("invalid latitude '{}': {e}", record.lat))
        })?;
        let longitude = record.lon.parse::<f64>().map_err(|e| {
            TripError::GeocodingService(format!("invalid longitude '{}': {e}", record.lon))
        })?;
        Ok(Coordinate::new(latitude, longitude))
    }
}

impl GeocodingService for NominatimGeocoder {
    fn geocode(&self, name: &str) -> Result<Option<Coordinate>, TripError> {
        log::debug!("geocoding '{name}' via {}", self.search_url);
        let response = self
            .client
            .get(&self.search_url)
            .query(&[("q", name), ("format", "json"), ("limit", "1")])
            .send()
            .map_err(|e| {
                TripError::GeocodingService(format!("GET request for '{name}' failed: {e}"))
            })?;
        let body = response.text().map_err(|e| {
            TripError::GeocodingService(format!("reading response for '{name}' failed: {e}"))
        })?;
        let records: Vec<NominatimRecord> = serde_json::from_str(&body).map_err(|e| {
            TripError::GeocodingService(format!("decoding response for '{name}' failed: {e}"))
        })?;
        match records.first() {
            None => Ok(None),
            Some(record) => Self::parse_coordinate(record).map(Some),
        }
    }
}
