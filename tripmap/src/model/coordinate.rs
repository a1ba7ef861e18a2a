use geo_types::Point;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// a geographic position. serialized as a [latitude, longitude] pair to
/// match the coordinate cache file format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Coordinate {
        Coordinate {
            latitude,
            longitude,
        }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from(value: (f64, f64)) -> Self {
        Coordinate {
            latitude: value.0,
            longitude: value.1,
        }
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(value: Coordinate) -> Self {
        (value.latitude, value.longitude)
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(value: Coordinate) -> Self {
        Point::new(value.longitude, value.latitude)
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_from_pair() {
        let coordinate: Coordinate = serde_json::from_str("[27.9924, -15.4192]").unwrap();
        assert_eq!(coordinate, Coordinate::new(27.9924, -15.4192));
    }

    #[test]
    fn test_serialize_as_pair() {
        let json = serde_json::to_string(&Coordinate::new(27.9924, -15.4192)).unwrap();
        assert_eq!(json, "[27.9924,-15.4192]");
    }

    #[test]
    fn test_point_conversion_is_x_lon_y_lat() {
        let point: Point<f64> = Coordinate::new(27.9924, -15.4192).into();
        assert_eq!(point.x(), -15.4192);
        assert_eq!(point.y(), 27.9924);
    }
}
