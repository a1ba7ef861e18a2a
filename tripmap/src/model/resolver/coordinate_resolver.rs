use super::{CoordinateCache, GeocodingService};
use crate::model::{Coordinate, TripError};

/// resolves location names to coordinates, checking the local cache before
/// falling back to a single external geocoding query. external results are
/// not written back to the cache, so repeat misses re-query the service.
pub struct CoordinateResolver {
    cache: CoordinateCache,
    geocoder: Box<dyn GeocodingService>,
}

impl CoordinateResolver {
    pub fn new(cache: CoordinateCache, geocoder: Box<dyn GeocodingService>) -> CoordinateResolver {
        CoordinateResolver { cache, geocoder }
    }

    /// looks up a location name. cache hits return immediately with no
    /// external call; misses issue exactly one geocoding query. a name
    /// unknown to both is a [TripError::LocationNotFound].
    pub fn resolve(&self, name: &str) -> Result<Coordinate, TripError> {
        if let Some(coordinate) = self.cache.get(name) {
            log::debug!("cache hit for '{name}': {coordinate}");
            return Ok(coordinate);
        }
        log::debug!("cache miss for '{name}', querying geocoding service");
        match self.geocoder.geocode(name)? {
            Some(coordinate) => Ok(coordinate),
            None => Err(TripError::LocationNotFound(String::from(name))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, collections::HashMap, rc::Rc};

    /// test double recording how often the external collaborator is hit.
    struct CountingGeocoder {
        calls: Rc<RefCell<usize>>,
        result: Option<Coordinate>,
    }

    impl GeocodingService for CountingGeocoder {
        fn geocode(&self, _name: &str) -> Result<Option<Coordinate>, TripError> {
            *self.calls.borrow_mut() += 1;
            Ok(self.result)
        }
    }

    fn counting_resolver(
        cache: HashMap<String, Coordinate>,
        result: Option<Coordinate>,
    ) -> (CoordinateResolver, Rc<RefCell<usize>>) {
        let calls = Rc::new(RefCell::new(0));
        let geocoder = CountingGeocoder {
            calls: calls.clone(),
            result,
        };
        let resolver = CoordinateResolver::new(CoordinateCache::from(cache), Box::new(geocoder));
        (resolver, calls)
    }

    #[test]
    fn test_cache_hit_never_invokes_geocoder() {
        let cache = HashMap::from([(String::from("Gibraltar"), Coordinate::new(36.1408, -5.3536))]);
        let (resolver, calls) = counting_resolver(cache, None);

        let first = resolver.resolve("Gibraltar").unwrap();
        let second = resolver.resolve("Gibraltar").unwrap();
        assert_eq!(first, Coordinate::new(36.1408, -5.3536));
        assert_eq!(first, second);
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_cache_miss_queries_geocoder_every_time() {
        let (resolver, calls) =
            counting_resolver(HashMap::new(), Some(Coordinate::new(1.0, 2.0)));

        let first = resolver.resolve("Atlantis").unwrap();
        let second = resolver.resolve("Atlantis").unwrap();
        assert_eq!(first, Coordinate::new(1.0, 2.0));
        assert_eq!(first, second);
        // external results are not cached back within a run
        assert_eq!(*calls.borrow(), 2);
    }

    #[test]
    fn test_unresolvable_name_is_location_not_found() {
        let (resolver, calls) = counting_resolver(HashMap::new(), None);

        match resolver.resolve("Atlantis") {
            Err(TripError::LocationNotFound(name)) => assert_eq!(name, "Atlantis"),
            other => panic!("expected LocationNotFound, found {other:?}"),
        }
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_geocoder_failure_propagates() {
        struct FailingGeocoder {}
        impl GeocodingService for FailingGeocoder {
            fn geocode(&self, name: &str) -> Result<Option<Coordinate>, TripError> {
                Err(TripError::GeocodingService(format!(
                    "GET request for '{name}' failed"
                )))
            }
        }
        let resolver =
            CoordinateResolver::new(CoordinateCache::default(), Box::new(FailingGeocoder {}));
        assert!(matches!(
            resolver.resolve("Atlantis"),
            Err(TripError::GeocodingService(_))
        ));
    }
}
