pub mod plot;
pub mod trip_cli;

pub use trip_cli::{TripCliArguments, TripOperation};
