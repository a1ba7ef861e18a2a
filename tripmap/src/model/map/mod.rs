mod html;
mod trip_map;

pub mod plot_ops;

pub use trip_map::{Marker, RouteLine, TripMap, DEFAULT_ZOOM, ROUTE_LINE_OPACITY, ROUTE_LINE_WEIGHT};
