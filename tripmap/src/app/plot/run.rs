use crate::model::{
    map::plot_ops,
    resolver::{CoordinateCache, CoordinateResolver, NominatimGeocoder},
    Trip, TripError,
};
use std::path::Path;

/// runs a complete plotting pass: loads the coordinate cache, builds the
/// resolver over it and the Nominatim geocoder, assembles the map, and
/// writes the artifact.
///
/// # Arguments
/// * `trip` - itinerary to plot
/// * `coordinates_file` - path to the coordinate cache JSON document
/// * `output_file` - output path for the rendered HTML map
///
/// # Result
/// If successful, returns nothing after printing a confirmation, otherwise
/// the first error encountered
pub fn run_trip_plot(
    trip: &Trip,
    coordinates_file: &Path,
    output_file: &Path,
) -> Result<(), TripError> {
    log::debug!(
        "run_trip_plot with {} destinations, {} routes, cache={coordinates_file:?}, output={output_file:?}",
        trip.destinations.len(),
        trip.routes.len()
    );
    let cache = CoordinateCache::from_file(coordinates_file)?;
    let geocoder = NominatimGeocoder::new()?;
    let resolver = CoordinateResolver::new(cache, Box::new(geocoder));
    plot_and_save(trip, &resolver, output_file)
}

/// assembles the trip map and writes it once to the output file. nothing is
/// written unless the whole plot succeeds.
pub fn plot_and_save(
    trip: &Trip,
    resolver: &CoordinateResolver,
    output_file: &Path,
) -> Result<(), TripError> {
    let map = plot_ops::plot_trip(trip, resolver)?;
    map.save(output_file)?;
    println!("Map saved as '{}'.", output_file.display());
    Ok(())
}
