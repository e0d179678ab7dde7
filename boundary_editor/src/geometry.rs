//! Geographic primitives for zone boundaries.

/// Representation of a geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns true when both components are finite and within the valid
    /// geographic ranges (latitude [-90, 90], longitude [-180, 180]).
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Axis-aligned extent of a set of coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLngBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl LatLngBounds {
    /// Creates a degenerate bounds containing only `p`.
    pub fn of(p: LatLng) -> Self {
        Self {
            south: p.lat,
            west: p.lng,
            north: p.lat,
            east: p.lng,
        }
    }

    /// Grows the bounds to include `p`.
    pub fn extend(&mut self, p: LatLng) {
        self.south = self.south.min(p.lat);
        self.west = self.west.min(p.lng);
        self.north = self.north.max(p.lat);
        self.east = self.east.max(p.lng);
    }

    /// Builds the bounds of `points`, or `None` when the slice is empty.
    pub fn from_points(points: &[LatLng]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self::of(*first);
        for p in rest {
            bounds.extend(*p);
        }
        Some(bounds)
    }

    /// Returns the midpoint of the bounds.
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }

    /// Returns true when `p` lies within the bounds.
    pub fn contains(&self, p: LatLng) -> bool {
        p.lat >= self.south && p.lat <= self.north && p.lng >= self.west && p.lng <= self.east
    }
}

/// Calculates the planar distance between two coordinates in degree space.
pub fn distance(a: LatLng, b: LatLng) -> f64 {
    ((b.lat - a.lat).powi(2) + (b.lng - a.lng).powi(2)).sqrt()
}

/// Calculates the area of a simple polygon using the shoelace formula.
///
/// Coordinates are treated as planar with longitude as x and latitude as y,
/// so the result is in square degrees.
pub fn polygon_area(vertices: &[LatLng]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..vertices.len() {
        let j = (i + 1) % vertices.len();
        sum += vertices[i].lng * vertices[j].lat - vertices[j].lng * vertices[i].lat;
    }
    sum.abs() * 0.5
}

/// Calculates the closed perimeter of a polygon in degree space.
pub fn polygon_perimeter(vertices: &[LatLng]) -> f64 {
    if vertices.len() < 2 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..vertices.len() {
        let j = (i + 1) % vertices.len();
        sum += distance(vertices[i], vertices[j]);
    }
    sum
}

/// Returns true when `p` lies inside the polygon, using ray casting.
///
/// Casts a horizontal ray eastward from `p` and counts edge crossings.
/// Points on an edge may land on either side.
pub fn point_in_polygon(p: LatLng, vertices: &[LatLng]) -> bool {
    if vertices.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let a = vertices[i];
        let b = vertices[j];
        let crosses = (a.lat > p.lat) != (b.lat > p.lat)
            && p.lng < (b.lng - a.lng) * (p.lat - a.lat) / (b.lat - a.lat) + a.lng;
        if crosses {
            inside = !inside;
        }
        j = i;
    }
    inside
}
