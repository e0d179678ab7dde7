//! File input and output helpers for boundary data.

pub mod geojson;

use std::fs::File;
use std::io::{self, Read, Write};

use crate::field;
use crate::geometry::LatLng;

/// Reads a file to string.
pub fn read_to_string(path: &str) -> io::Result<String> {
    let mut buffer = String::new();
    File::open(path)?.read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Writes a string to a file, replacing any existing contents.
pub fn write_string(path: &str, contents: &str) -> io::Result<()> {
    File::create(path)?.write_all(contents.as_bytes())
}

/// Reads a boundary file in the form-field JSON encoding.
///
/// Unlike the editor's permissive preload, malformed or out-of-range content
/// is reported as an error so callers can surface it.
pub fn read_boundary_json(path: &str) -> io::Result<Vec<LatLng>> {
    let contents = read_to_string(path)?;
    let pts: Vec<LatLng> = serde_json::from_str(&contents)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    if let Some(bad) = pts.iter().find(|p| !p.is_valid()) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("coordinate out of range: lat: {}, lng: {}", bad.lat, bad.lng),
        ));
    }
    Ok(pts)
}

/// Writes a boundary file in the form-field JSON encoding.
pub fn write_boundary_json(path: &str, boundary: &[LatLng]) -> io::Result<()> {
    write_string(path, &field::serialize_boundary(boundary))
}
