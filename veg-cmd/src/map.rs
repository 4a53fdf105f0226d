//! Standalone study-area map page.

use log::info;
use veg_core::region::MapOverlay;

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8" />
<title>Study area</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" />
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<style>html, body, #map { height: 100%; margin: 0; }</style>
</head>
<body>
<div id="map"></div>
<script>
var overlay = __OVERLAY__;
var map = L.map('map').setView(overlay.center, overlay.zoom);
L.tileLayer('https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png', {
  maxZoom: 18,
  attribution: '&copy; OpenStreetMap contributors'
}).addTo(map);
L.polygon(overlay.polygon, {
  color: overlay.color,
  fill: overlay.fill,
  fillColor: overlay.fill_color,
  weight: overlay.weight
}).addTo(map);
</script>
</body>
</html>
"#;

/// Render the map page for an overlay.
pub fn map_html(overlay: &MapOverlay) -> anyhow::Result<String> {
    Ok(PAGE_TEMPLATE.replace("__OVERLAY__", &overlay.to_json()?))
}

pub fn run_map(output: &str) -> anyhow::Result<()> {
    let html = map_html(&MapOverlay::study_area())?;
    std::fs::write(output, html)?;
    info!("Map written to {}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_html_embeds_polygon() {
        let html = map_html(&MapOverlay::study_area()).unwrap();
        assert!(html.contains("[13.477398,102.365067]"));
        assert!(html.contains("\"zoom\":9"));
        assert!(!html.contains("__OVERLAY__"));
    }
}
