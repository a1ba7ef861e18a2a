mod coordinate_cache;
mod coordinate_resolver;
mod geocoding_service;
mod nominatim;

pub use coordinate_cache::CoordinateCache;
pub use coordinate_resolver::CoordinateResolver;
pub use geocoding_service::GeocodingService;
pub use nominatim::NominatimGeocoder;
