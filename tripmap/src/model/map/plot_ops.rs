use super::trip_map::{TripMap, DEFAULT_ZOOM};
use crate::model::{resolver::CoordinateResolver, Trip, TripError};

/// assembles the map for a trip: a canvas centered on the first destination,
/// one marker per destination, and one colored line per route leg, all in
/// itinerary order. the shape invariant is checked before any resolution
/// work begins, and any resolution failure aborts the whole plot.
///
/// # Arguments
/// * `trip` - destinations to mark and the modes connecting them
/// * `resolver` - coordinate lookup over the run's cache and geocoder
///
/// # Returns
/// The assembled map, ready to serialize, or the first error encountered
pub fn plot_trip(trip: &Trip, resolver: &CoordinateResolver) -> Result<TripMap, TripError> {
    trip.validate()?;

    let start = resolver.resolve(&trip.destinations[0])?;
    let mut map = TripMap::new(start, DEFAULT_ZOOM);

    for destination in trip.destinations.iter() {
        let coordinate = resolver.resolve(destination)?;
        map.add_marker(coordinate, destination);
    }

    // leg endpoints are re-resolved rather than reused from the marker
    // pass. cache hits are deterministic so the coordinates agree.
    for (origin, destination, mode) in trip.legs() {
        let origin_coordinate = resolver.resolve(origin)?;
        let destination_coordinate = resolver.resolve(destination)?;
        map.add_line(origin_coordinate, destination_coordinate, mode.line_color());
    }

    log::info!(
        "plotted {} markers and {} route lines",
        map.markers().len(),
        map.lines().len()
    );
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        resolver::{CoordinateCache, CoordinateResolver, GeocodingService},
        Coordinate, LineColor, TravelMode, TripError,
    };
    use std::collections::HashMap;

    /// geocoder double for runs expected to stay inside the cache.
    struct UnreachableGeocoder {}

    impl GeocodingService for UnreachableGeocoder {
        fn geocode(&self, name: &str) -> Result<Option<Coordinate>, TripError> {
            panic!("unexpected geocoding call for '{name}'")
        }
    }

    /// geocoder double with no results, for exercising the not-found path.
    struct EmptyGeocoder {}

    impl GeocodingService for EmptyGeocoder {
        fn geocode(&self, _name: &str) -> Result<Option<Coordinate>, TripError> {
            Ok(None)
        }
    }

    fn abc_cache() -> CoordinateCache {
        CoordinateCache::from(HashMap::from([
            (String::from("A"), Coordinate::new(0.0, 0.0)),
            (String::from("B"), Coordinate::new(1.0, 1.0)),
            (String::from("C"), Coordinate::new(2.0, 2.0)),
        ]))
    }

    fn trip_of(destinations: &[&str], routes: &[&str]) -> Trip {
        Trip::new(
            destinations.iter().map(|d| String::from(*d)).collect(),
            routes.iter().map(|r| TravelMode::from(*r)).collect(),
        )
    }

    #[test]
    fn test_plot_produces_markers_and_lines_in_order() {
        let resolver = CoordinateResolver::new(abc_cache(), Box::new(UnreachableGeocoder {}));
        let trip = trip_of(&["A", "B", "C"], &["ferry", "flight"]);

        let map = plot_trip(&trip, &resolver).unwrap();

        assert_eq!(map.center(), Coordinate::new(0.0, 0.0));
        assert_eq!(map.zoom(), DEFAULT_ZOOM);

        let markers = map.markers();
        assert_eq!(markers.len(), 3);
        assert_eq!(markers[0].label, "A");
        assert_eq!(markers[0].coordinate, Coordinate::new(0.0, 0.0));
        assert_eq!(markers[1].label, "B");
        assert_eq!(markers[1].coordinate, Coordinate::new(1.0, 1.0));
        assert_eq!(markers[2].label, "C");
        assert_eq!(markers[2].coordinate, Coordinate::new(2.0, 2.0));

        let lines = map.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].start, Coordinate::new(0.0, 0.0));
        assert_eq!(lines[0].end, Coordinate::new(1.0, 1.0));
        assert_eq!(lines[0].color, LineColor::Green);
        assert_eq!(lines[1].start, Coordinate::new(1.0, 1.0));
        assert_eq!(lines[1].end, Coordinate::new(2.0, 2.0));
        assert_eq!(lines[1].color, LineColor::Red);
    }

    #[test]
    fn test_plot_single_destination_has_no_lines() {
        let resolver = CoordinateResolver::new(abc_cache(), Box::new(UnreachableGeocoder {}));
        let trip = trip_of(&["A"], &[]);

        let map = plot_trip(&trip, &resolver).unwrap();
        assert_eq!(map.markers().len(), 1);
        assert!(map.lines().is_empty());
    }

    #[test]
    fn test_plot_duplicate_destinations_resolve_independently() {
        let resolver = CoordinateResolver::new(abc_cache(), Box::new(UnreachableGeocoder {}));
        let trip = trip_of(&["A", "B", "A"], &["drive", "drive"]);

        let map = plot_trip(&trip, &resolver).unwrap();
        assert_eq!(map.markers().len(), 3);
        assert_eq!(map.markers()[2].coordinate, Coordinate::new(0.0, 0.0));
    }

    #[test]
    fn test_shape_mismatch_precedes_any_resolution() {
        // the panicking geocoder with an empty cache proves the invariant
        // check runs before any resolution attempt
        let resolver = CoordinateResolver::new(
            CoordinateCache::default(),
            Box::new(UnreachableGeocoder {}),
        );
        let trip = trip_of(&["A", "B"], &[]);

        assert!(matches!(
            plot_trip(&trip, &resolver),
            Err(TripError::InputShapeMismatch {
                destinations: 2,
                routes: 0
            })
        ));
    }

    #[test]
    fn test_unresolvable_destination_aborts_plot() {
        let resolver =
            CoordinateResolver::new(CoordinateCache::default(), Box::new(EmptyGeocoder {}));
        let trip = trip_of(&["X"], &[]);

        match plot_trip(&trip, &resolver) {
            Err(TripError::LocationNotFound(name)) => assert_eq!(name, "X"),
            other => panic!("expected LocationNotFound, found {other:?}"),
        }
    }
}
