//! The static study-area overlay drawn on the dashboard map.
//!
//! The polygon is decoration only: nothing in the aggregation pipeline
//! reads it.

use serde::Serialize;

/// Map centre as (latitude, longitude).
pub const MAP_CENTER: [f64; 2] = [13.58111, 102.97959];

/// Initial zoom level of the base map.
pub const MAP_ZOOM: u8 = 9;

/// Study-area outline as (latitude, longitude) vertices. First and last are
/// identical so the ring is closed.
pub const REGION_POLYGON: [[f64; 2]; 13] = [
    [13.477398, 102.365067],
    [13.477398, 102.683824],
    [13.391907, 102.697564],
    [13.35984, 103.412019],
    [13.883059, 103.434002],
    [14.016346, 103.326834],
    [13.952378, 103.208674],
    [14.117593, 103.20043],
    [14.221457, 103.052043],
    [13.661633, 102.540933],
    [13.613586, 102.620622],
    [13.554836, 102.340113],
    [13.477398, 102.365067],
];

/// Everything a map widget needs to draw the overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapOverlay {
    pub center: [f64; 2],
    pub zoom: u8,
    pub polygon: Vec<[f64; 2]>,
    pub color: String,
    pub fill_color: String,
    pub fill: bool,
    pub weight: u8,
}

impl MapOverlay {
    /// The fixed study area: blue outline, blue fill, weight 2.
    pub fn study_area() -> Self {
        Self {
            center: MAP_CENTER,
            zoom: MAP_ZOOM,
            polygon: REGION_POLYGON.to_vec(),
            color: "blue".to_string(),
            fill_color: "blue".to_string(),
            fill: true,
            weight: 2,
        }
    }

    pub fn is_closed(&self) -> bool {
        match (self.polygon.first(), self.polygon.last()) {
            (Some(first), Some(last)) => self.polygon.len() > 2 && first == last,
            _ => false,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_study_area_is_closed_ring() {
        let overlay = MapOverlay::study_area();
        assert_eq!(overlay.polygon.len(), 13);
        assert!(overlay.is_closed());
    }

    #[test]
    fn test_overlay_json_shape() {
        let json = MapOverlay::study_area().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["zoom"], 9);
        assert_eq!(value["polygon"].as_array().unwrap().len(), 13);
        assert_eq!(value["center"][0], 13.58111);
    }
}
