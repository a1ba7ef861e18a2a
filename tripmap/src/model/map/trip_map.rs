use super::html;
use crate::model::{Coordinate, LineColor, TripError};
use geo_types::{coord, LineString};
use std::path::Path;

/// initial zoom level of the rendered canvas.
pub const DEFAULT_ZOOM: u32 = 6;
/// stroke width of route lines, in pixels.
pub const ROUTE_LINE_WEIGHT: u32 = 3;
/// stroke opacity of route lines.
pub const ROUTE_LINE_OPACITY: f64 = 0.7;

/// a marker placed at a destination, labeled with its display name.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub coordinate: Coordinate,
    pub label: String,
}

/// a styled line segment connecting two consecutive destinations.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteLine {
    pub start: Coordinate,
    pub end: Coordinate,
    pub color: LineColor,
}

impl RouteLine {
    /// the segment geometry with x as longitude and y as latitude.
    pub fn line_string(&self) -> LineString<f64> {
        LineString::new(vec![
            coord! { x: self.start.longitude, y: self.start.latitude },
            coord! { x: self.end.longitude, y: self.end.latitude },
        ])
    }
}

/// the assembled map artifact: a canvas centered on the first destination
/// with one marker per destination and one colored line per route leg.
/// built fully in memory and written exactly once, so a failed plotting run
/// never leaves a partial file behind.
#[derive(Debug, Clone)]
pub struct TripMap {
    center: Coordinate,
    zoom: u32,
    markers: Vec<Marker>,
    lines: Vec<RouteLine>,
}

impl TripMap {
    pub fn new(center: Coordinate, zoom: u32) -> TripMap {
        TripMap {
            center,
            zoom,
            markers: vec![],
            lines: vec![],
        }
    }

    pub fn add_marker(&mut self, coordinate: Coordinate, label: &str) {
        self.markers.push(Marker {
            coordinate,
            label: String::from(label),
        });
    }

    pub fn add_line(&mut self, start: Coordinate, end: Coordinate, color: LineColor) {
        self.lines.push(RouteLine { start, end, color });
    }

    pub fn center(&self) -> Coordinate {
        self.center
    }

    pub fn zoom(&self) -> u32 {
        self.zoom
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn lines(&self) -> &[RouteLine] {
        &self.lines
    }

    /// serializes the canvas to a standalone Leaflet HTML document.
    pub fn to_html(&self) -> String {
        html::render(self)
    }

    /// writes the rendered document to a file, overwriting any existing
    /// file at that path.
    pub fn save(&self, path: &Path) -> Result<(), TripError> {
        let document = self.to_html();
        std::fs::write(path, document).map_err(|e| TripError::MapWriteError {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }
}
