use crate::model::{TravelMode, TripError};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// an ordered itinerary: destinations to visit and the travel mode
/// connecting each consecutive pair. shape invariant: one route per pair,
/// so `routes.len() == destinations.len() - 1`. duplicate destination names
/// are allowed and resolved independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    pub destinations: Vec<String>,
    pub routes: Vec<TravelMode>,
}

impl Trip {
    pub fn new(destinations: Vec<String>, routes: Vec<TravelMode>) -> Trip {
        Trip {
            destinations,
            routes,
        }
    }

    /// confirms the shape invariant, reporting both lengths on violation.
    /// called before any resolution or rendering work begins.
    pub fn validate(&self) -> Result<(), TripError> {
        if self.destinations.len() != self.routes.len() + 1 {
            return Err(TripError::InputShapeMismatch {
                destinations: self.destinations.len(),
                routes: self.routes.len(),
            });
        }
        Ok(())
    }

    /// consecutive destination pairs zipped with the mode connecting them,
    /// in itinerary order.
    pub fn legs(&self) -> impl Iterator<Item = (&String, &String, &TravelMode)> {
        self.destinations
            .iter()
            .tuple_windows()
            .zip(self.routes.iter())
            .map(|((origin, destination), mode)| (origin, destination, mode))
    }

    /// the built-in example itinerary, a perimeter tour of Europe. used
    /// when no trip file is provided on the command line.
    pub fn example() -> Trip {
        let destinations = [
            "Telde, Spain",
            "Laayoune, Morocco",
            "Casablanca, Morocco",
            "Tangier, Morocco",
            "Gibraltar",
            "Porto, Portugal",
            "Madrid, Spain",
            "Barcelona, Spain",
            "Andorra la Vella, Andorra",
            "Marseille, France",
            "Monte Carlo, Monaco",
            "Genoa, Italy",
            "Florence, Italy",
            "Dogana, San Marino",
            "Venice, Italy",
            "Ljubljana, Slovenia",
            "Zagreb, Croatia",
            "Banja Luka, Bosnia and Herzegovina",
            "Sarajevo, Bosnia and Herzegovina",
            "Dubrovnik, Croatia",
            "Tirana, Albania",
            "Athens, Greece",
            "Larnaca, Cyprus",
            "North Nicosia, Northern Cyprus",
            "Beirut, Lebanon",
            "Amman, Jordan",
            "Istanbul, Turkey",
            "Varna, Bulgaria",
            "Bucharest, Romania",
            "Belgrade, Serbia",
            "Budapest, Hungary",
            "Bratislava, Slovakia",
            "Vienna, Austria",
            "Prague, Czechia",
            "Warsaw, Poland",
            "Kaliningrad, Russia",
            "Klaipeda, Lithuania",
            "Riga, Latvia",
            "Tallinn, Estonia",
            "Helsinki, Finland",
            "Turku, Finland",
            "Berghamn, Finland",
            "Grisslehamn, Sweden",
            "Stockholm, Sweden",
            "Gothenburg, Sweden",
            "Copenhagen, Denmark",
            "Lubeck, Germany",
            "Hamburg, Germany",
            "Amsterdam, Netherlands",
            "Antwerp, Belgium",
            "Calais, France",
            "London, United Kingdom",
            "Edinburgh, United Kingdom",
            "Cork, Ireland",
        ]
        .into_iter()
        .map(String::from)
        .collect_vec();
        let routes = [
            "flight", "drive", "drive", "ferry", "drive", "drive", "drive", "drive", "drive",
            "drive", "drive", "drive", "drive", "drive", "drive", "drive", "drive", "drive",
            "drive", "drive", "drive", "flight", "bus", "flight", "bus", "flight", "bus", "drive",
            "drive", "drive", "drive", "drive", "drive", "drive", "bus", "bus", "drive", "drive",
            "ferry", "drive", "ferry", "ferry", "drive", "drive", "drive", "ferry", "drive",
            "drive", "drive", "drive", "drive", "bus", "flight",
        ]
        .into_iter()
        .map(TravelMode::from)
        .collect_vec();
        Trip::new(destinations, routes)
    }
}

impl TryFrom<&String> for Trip {
    type Error = TripError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| TripError::TripFileError {
                path: f.clone(),
                message: format!("failure reading file: {e}"),
            })?;
            toml::from_str(&s).map_err(|e| TripError::TripFileError {
                path: f.clone(),
                message: format!("failure decoding file: {e}"),
            })
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| TripError::TripFileError {
                path: f.clone(),
                message: format!("failure reading file: {e}"),
            })?;
            serde_json::from_str(&s).map_err(|e| TripError::TripFileError {
                path: f.clone(),
                message: format!("failure decoding file: {e}"),
            })
        } else {
            Err(TripError::UnsupportedTripFile(f.clone()))
        }
    }
}
