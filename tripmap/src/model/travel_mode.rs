use crate::model::LineColor;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// travel mode tag for a single leg of a trip. parsing is infallible and
/// case-sensitive: any tag outside the known set is carried as-is in
/// [TravelMode::Other] rather than rejected, so unlisted future tags still
/// plot (with the default line color).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TravelMode {
    Drive,
    Ferry,
    Flight,
    Bus,
    Other(String),
}

impl TravelMode {
    /// the line color drawn for legs traveled by this mode. total over all
    /// modes: unrecognized tags fall back to the default (blue), same as
    /// driving.
    pub fn line_color(&self) -> LineColor {
        match self {
            TravelMode::Ferry => LineColor::Green,
            TravelMode::Flight => LineColor::Red,
            TravelMode::Bus => LineColor::Orange,
            TravelMode::Drive | TravelMode::Other(_) => LineColor::Blue,
        }
    }
}

impl From<String> for TravelMode {
    fn from(value: String) -> Self {
        match value.as_str() {
            "drive" => TravelMode::Drive,
            "ferry" => TravelMode::Ferry,
            "flight" => TravelMode::Flight,
            "bus" => TravelMode::Bus,
            _ => TravelMode::Other(value),
        }
    }
}

impl From<&str> for TravelMode {
    fn from(value: &str) -> Self {
        TravelMode::from(String::from(value))
    }
}

impl From<TravelMode> for String {
    fn from(value: TravelMode) -> Self {
        value.to_string()
    }
}

impl Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TravelMode::Drive => write!(f, "drive"),
            TravelMode::Ferry => write!(f, "ferry"),
            TravelMode::Flight => write!(f, "flight"),
            TravelMode::Bus => write!(f, "bus"),
            TravelMode::Other(tag) => write!(f, "{tag}"),
        }
    }
}
