use crate::model::{Coordinate, TripError};

/// external geocoding collaborator. implementations run a single lookup for
/// a location name, returning None when the service has no match. transport
/// failures are errors, distinct from an empty result.
pub trait GeocodingService {
    fn geocode(&self, name: &str) -> Result<Option<Coordinate>, TripError>;
}
