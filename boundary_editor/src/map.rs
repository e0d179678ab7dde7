//! Seam to the external mapping and drawing provider.
//!
//! Rendering, freehand drawing and overlay editing are delegated entirely;
//! the editor issues the capability calls below and consumes [`MapEvent`]
//! values the host runtime feeds back.

use crate::geometry::{LatLng, LatLngBounds};

/// Identifier of a polygon overlay owned by the map surface.
pub type PolygonId = usize;

/// Capability set the editor requires from the mapping provider.
pub trait MapSurface {
    /// Renders the base map centered on `center` at `zoom`.
    fn render(&mut self, center: LatLng, zoom: u8);

    /// Enables the freehand polygon drawing mode.
    fn enable_polygon_drawing(&mut self);

    /// Creates an editable polygon overlay and returns its identifier.
    fn create_polygon(&mut self, path: &[LatLng]) -> PolygonId;

    /// Removes a polygon overlay from the surface.
    fn remove_polygon(&mut self, id: PolygonId);

    /// Adjusts the viewport to fit `bounds`.
    fn fit_bounds(&mut self, bounds: LatLngBounds);
}

/// Drawing and editing notifications delivered by the host runtime.
///
/// Handlers run to completion before the next event is dispatched, so the
/// editor observes every mutation in order.
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    /// The operator finished drawing a new polygon.
    DrawComplete { path: Vec<LatLng> },
    /// A vertex of the active polygon was dragged to a new position.
    VertexMoved { index: usize, position: LatLng },
    /// A vertex was inserted into the active polygon at `index`.
    VertexInserted { index: usize, position: LatLng },
    /// The vertex at `index` was deleted from the active polygon.
    VertexRemoved { index: usize },
}
