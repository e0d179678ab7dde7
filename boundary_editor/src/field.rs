//! Serialized mirror of the active polygon, as carried by the hidden form
//! field the admin page submits.

use crate::geometry::LatLng;

/// Parses the serialized boundary from a hidden-field value.
///
/// Empty, malformed or out-of-range content yields an empty boundary; the
/// editor preloads nothing in that case rather than raising an error.
pub fn parse_boundary(raw: &str) -> Vec<LatLng> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Vec<LatLng>>(raw) {
        Ok(pts) if pts.iter().all(LatLng::is_valid) => pts,
        Ok(_) => {
            log::warn!("stored boundary has non-finite or out-of-range coordinates, ignoring");
            Vec::new()
        }
        Err(e) => {
            log::warn!("stored boundary is not valid JSON, ignoring: {e}");
            Vec::new()
        }
    }
}

/// Serializes a boundary in the `[{"lat": .., "lng": ..}]` form the admin
/// form submits downstream.
pub fn serialize_boundary(boundary: &[LatLng]) -> String {
    serde_json::to_string(boundary).unwrap_or_else(|_| String::from("[]"))
}

/// In-memory stand-in for the hidden form input shared between the editor
/// and the submitting form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundaryField {
    value: String,
}

impl BoundaryField {
    /// Creates a field holding the given initial raw value.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            value: initial.into(),
        }
    }

    /// Raw serialized content, exactly as submitted downstream.
    pub fn raw(&self) -> &str {
        &self.value
    }

    /// True when no boundary is configured.
    pub fn is_empty(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Parses the current content, degrading to an empty boundary.
    pub fn boundary(&self) -> Vec<LatLng> {
        parse_boundary(&self.value)
    }

    /// Overwrites the content with the serialized form of `boundary`.
    pub fn store(&mut self, boundary: &[LatLng]) {
        self.value = serialize_boundary(boundary);
    }
}
