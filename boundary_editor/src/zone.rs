//! Pricing zone records tying a business region to its drawn boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::field;
use crate::geometry::{point_in_polygon, polygon_area, LatLng, LatLngBounds};

/// A named service region whose geometry is an operator-drawn boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingZone {
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub boundary: Vec<LatLng>,
    pub created_at: DateTime<Utc>,
}

impl PricingZone {
    /// Creates an active zone with no boundary.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            is_active: true,
            boundary: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// True when the boundary encloses a usable area.
    pub fn has_boundary(&self) -> bool {
        self.boundary.len() >= 3
    }

    /// Returns true when `p` falls inside the zone boundary.
    ///
    /// A zone without a usable boundary contains nothing.
    pub fn contains(&self, p: LatLng) -> bool {
        self.has_boundary() && point_in_polygon(p, &self.boundary)
    }

    /// Enclosed area of the boundary in planar degree space.
    pub fn area(&self) -> f64 {
        polygon_area(&self.boundary)
    }

    /// Extent of the boundary, if one is set.
    pub fn bounds(&self) -> Option<LatLngBounds> {
        LatLngBounds::from_points(&self.boundary)
    }

    /// Human-readable list of boundary points for admin listings.
    pub fn boundary_summary(&self) -> String {
        if self.boundary.is_empty() {
            return String::from("No boundaries");
        }
        let coords = self
            .boundary
            .iter()
            .map(|p| format!("lat: {}, lng: {}", p.lat, p.lng))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{} points: {}", self.boundary.len(), coords)
    }

    /// Serialized form-field representation of the boundary.
    pub fn boundary_json(&self) -> String {
        field::serialize_boundary(&self.boundary)
    }
}
