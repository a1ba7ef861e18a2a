use thiserror::Error;

#[derive(Error, Debug)]
pub enum TripError {
    #[error("trip shape mismatch: expected one route per consecutive destination pair, found {destinations} destinations and {routes} routes")]
    InputShapeMismatch { destinations: usize, routes: usize },
    #[error("location '{0}' not found in coordinate cache nor by geocoding service")]
    LocationNotFound(String),
    #[error("geocoding service failure: {0}")]
    GeocodingService(String),
    #[error("failure reading coordinate cache {path}: {message}")]
    CacheLoadError { path: String, message: String },
    #[error("failure reading trip file {path}: {message}")]
    TripFileError { path: String, message: String },
    #[error("unsupported trip file type: {0}")]
    UnsupportedTripFile(String),
    #[error("failure writing trip map to {path}: {source}")]
    MapWriteError {
        path: String,
        source: std::io::Error,
    },
}
