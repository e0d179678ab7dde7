//! GeoJSON interchange for zone boundaries.

use std::io;

use geo_types::{LineString, Polygon};
use geojson::{Feature, GeoJson, Geometry, Value};

use crate::geometry::LatLng;

/// Reads a zone boundary from a GeoJSON file.
///
/// The file may contain a bare geometry, a feature or a feature collection;
/// the first polygon found supplies the exterior ring. The ring's closing
/// duplicate vertex is dropped so the result matches the form-field shape.
pub fn read_boundary_geojson(path: &str) -> io::Result<Vec<LatLng>> {
    let contents = crate::io::read_to_string(path)?;
    let gj: GeoJson = contents
        .parse()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let geometry = first_polygon(&gj)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "no polygon geometry found"))?;
    let polygon = Polygon::<f64>::try_from(geometry)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let mut pts: Vec<LatLng> = polygon
        .exterior()
        .points()
        .map(|p| LatLng::new(p.y(), p.x()))
        .collect();
    if pts.len() > 1 && pts.first() == pts.last() {
        pts.pop();
    }
    Ok(pts)
}

/// Writes a zone boundary as a GeoJSON polygon feature.
///
/// Positions are emitted `[lng, lat]` with a closed exterior ring.
pub fn write_boundary_geojson(path: &str, boundary: &[LatLng]) -> io::Result<()> {
    if boundary.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "cannot export an empty boundary",
        ));
    }
    let ring = LineString::from(
        boundary
            .iter()
            .map(|p| (p.lng, p.lat))
            .collect::<Vec<(f64, f64)>>(),
    );
    // Polygon::new closes the exterior ring.
    let polygon = Polygon::new(ring, vec![]);
    let feature = Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::from(&polygon))),
        id: None,
        properties: None,
        foreign_members: None,
    };
    crate::io::write_string(path, &GeoJson::Feature(feature).to_string())
}

fn first_polygon(gj: &GeoJson) -> Option<&Geometry> {
    match gj {
        GeoJson::Geometry(g) => polygon_only(g),
        GeoJson::Feature(f) => f.geometry.as_ref().and_then(polygon_only),
        GeoJson::FeatureCollection(fc) => fc
            .features
            .iter()
            .filter_map(|f| f.geometry.as_ref())
            .find_map(polygon_only),
    }
}

fn polygon_only(g: &Geometry) -> Option<&Geometry> {
    match g.value {
        Value::Polygon(_) => Some(g),
        _ => None,
    }
}
