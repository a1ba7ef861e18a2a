mod coordinate;
mod line_color;
mod travel_mode;
mod trip;
mod trip_error;

pub mod map;
pub mod resolver;

pub use coordinate::Coordinate;
pub use line_color::LineColor;
pub use travel_mode::TravelMode;
pub use trip::Trip;
pub use trip_error::TripError;
