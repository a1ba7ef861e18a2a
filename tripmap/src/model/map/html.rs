use super::trip_map::{TripMap, ROUTE_LINE_OPACITY, ROUTE_LINE_WEIGHT};
use itertools::Itertools;
use std::fmt::Write;

const LEAFLET_CSS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";

/// serializes an assembled [TripMap] into a standalone Leaflet HTML page.
/// markers and route lines appear in insertion order.
pub fn render(map: &TripMap) -> String {
    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\"/>\n");
    page.push_str("<title>trip map</title>\n");
    let _ = writeln!(page, "<link rel=\"stylesheet\" href=\"{LEAFLET_CSS_URL}\"/>");
    let _ = writeln!(page, "<script src=\"{LEAFLET_JS_URL}\"></script>");
    page.push_str("<style>html, body, #map { height: 100%; margin: 0; }</style>\n");
    page.push_str("</head>\n<body>\n<div id=\"map\"></div>\n<script>\n");

    let center = map.center();
    let _ = writeln!(
        page,
        "var map = L.map(\"map\").setView([{}, {}], {});",
        center.latitude,
        center.longitude,
        map.zoom()
    );
    page.push_str("L.tileLayer(\"");
    page.push_str(TILE_URL);
    page.push_str(
        "\", { maxZoom: 19, attribution: \"&copy; OpenStreetMap contributors\" }).addTo(map);\n",
    );

    for marker in map.markers() {
        let _ = writeln!(
            page,
            "L.marker([{}, {}]).addTo(map).bindPopup(\"{}\");",
            marker.coordinate.latitude,
            marker.coordinate.longitude,
            escape_js_string(&marker.label)
        );
    }

    for line in map.lines() {
        // leaflet expects [lat, lng] ordering, the reverse of the geometry's x/y
        let coordinates = line
            .line_string()
            .coords()
            .map(|c| format!("[{}, {}]", c.y, c.x))
            .join(", ");
        let _ = writeln!(
            page,
            "L.polyline([{}], {{ color: \"{}\", weight: {}, opacity: {} }}).addTo(map);",
            coordinates,
            line.color,
            ROUTE_LINE_WEIGHT,
            ROUTE_LINE_OPACITY
        );
    }

    page.push_str("</script>\n</body>\n</html>\n");
    page
}

/// escapes a label for embedding in a double-quoted javascript string.
fn escape_js_string(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('\n', "\\n")
}
