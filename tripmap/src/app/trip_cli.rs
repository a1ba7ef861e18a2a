use crate::model::{Trip, TripError};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// command line tool that renders multimodal trip itineraries to maps
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct TripCliArguments {
    /// select the trip operation to run
    #[command(subcommand)]
    pub op: TripOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum TripOperation {
    /// plots a trip itinerary as labeled markers and color-coded route
    /// lines, writing the result to a standalone HTML file.
    Plot {
        /// path to a .json or .toml trip file listing destinations and
        /// routes. when omitted, plots the built-in example itinerary.
        #[arg(short, long)]
        trip_file: Option<String>,
        /// path to the local coordinate cache JSON file
        #[arg(short, long, default_value_t = String::from("coordinates.json"))]
        coordinates_file: String,
        /// output path for the rendered HTML map
        #[arg(short, long, default_value_t = String::from("index.html"))]
        output_file: String,
    },
}

impl TripOperation {
    pub fn run(&self) -> Result<(), TripError> {
        match self {
            TripOperation::Plot {
                trip_file,
                coordinates_file,
                output_file,
            } => {
                let trip = match trip_file {
                    None => Trip::example(),
                    Some(f) => {
                        log::info!("reading trip from {f}");
                        Trip::try_from(f)?
                    }
                };
                crate::app::plot::run_trip_plot(
                    &trip,
                    Path::new(coordinates_file),
                    Path::new(output_file),
                )
            }
        }
    }
}
