//! Single-polygon boundary editor driven by map events.

use crate::field::BoundaryField;
use crate::geometry::{LatLng, LatLngBounds};
use crate::map::{MapEvent, MapSurface, PolygonId};

/// Default map center used before any boundary exists (Cairo).
pub const DEFAULT_CENTER: LatLng = LatLng {
    lat: 30.0444,
    lng: 31.2357,
};

/// Default zoom level for a fresh map.
pub const DEFAULT_ZOOM: u8 = 10;

/// The single editable overlay and its canonical vertex path.
#[derive(Debug, Clone, PartialEq)]
struct ActivePolygon {
    id: PolygonId,
    path: Vec<LatLng>,
}

/// Editor state for one boundary form field.
///
/// Owns the field mirror and the active polygon. All mutation flows through
/// the named event handlers, each of which re-serializes the field once the
/// edit has been applied, so the field never lags the polygon.
#[derive(Debug)]
pub struct BoundaryEditor {
    field: BoundaryField,
    active: Option<ActivePolygon>,
}

impl BoundaryEditor {
    /// Sets up the map surface and preloads a stored boundary, if any.
    ///
    /// The map is rendered at the default center and zoom with polygon
    /// drawing enabled. When `initial_field_value` parses to a non-empty
    /// boundary it becomes the editable active polygon and the viewport is
    /// fitted to its extent; malformed or empty content preloads nothing.
    /// The field itself is never rewritten during initialization.
    pub fn initialize(surface: &mut dyn MapSurface, initial_field_value: &str) -> Self {
        surface.render(DEFAULT_CENTER, DEFAULT_ZOOM);
        surface.enable_polygon_drawing();

        let field = BoundaryField::new(initial_field_value);
        let path = field.boundary();
        let active = if path.is_empty() {
            None
        } else {
            let id = surface.create_polygon(&path);
            if let Some(bounds) = LatLngBounds::from_points(&path) {
                surface.fit_bounds(bounds);
            }
            Some(ActivePolygon { id, path })
        };
        Self { field, active }
    }

    /// Routes a drawing or editing notification to its handler.
    pub fn handle(&mut self, surface: &mut dyn MapSurface, event: MapEvent) {
        match event {
            MapEvent::DrawComplete { path } => self.on_draw_complete(surface, path),
            MapEvent::VertexMoved { index, position } => self.on_vertex_moved(index, position),
            MapEvent::VertexInserted { index, position } => {
                self.on_vertex_inserted(index, position)
            }
            MapEvent::VertexRemoved { index } => self.on_vertex_removed(index),
        }
    }

    /// Replaces the active polygon with a freshly drawn one.
    ///
    /// Any previous polygon is removed from the surface, never merged.
    pub fn on_draw_complete(&mut self, surface: &mut dyn MapSurface, path: Vec<LatLng>) {
        if let Some(old) = self.active.take() {
            surface.remove_polygon(old.id);
        }
        let id = surface.create_polygon(&path);
        self.active = Some(ActivePolygon { id, path });
        self.sync_field();
    }

    /// Applies a vertex drag to the active polygon.
    pub fn on_vertex_moved(&mut self, index: usize, position: LatLng) {
        let active = match self.active.as_mut() {
            Some(a) => a,
            None => return,
        };
        if index >= active.path.len() {
            log::debug!("vertex move at {index} outside path, ignoring");
            return;
        }
        active.path[index] = position;
        self.sync_field();
    }

    /// Inserts a vertex into the active polygon.
    pub fn on_vertex_inserted(&mut self, index: usize, position: LatLng) {
        let active = match self.active.as_mut() {
            Some(a) => a,
            None => return,
        };
        if index > active.path.len() {
            log::debug!("vertex insert at {index} outside path, ignoring");
            return;
        }
        active.path.insert(index, position);
        self.sync_field();
    }

    /// Deletes a vertex from the active polygon.
    pub fn on_vertex_removed(&mut self, index: usize) {
        let active = match self.active.as_mut() {
            Some(a) => a,
            None => return,
        };
        if index >= active.path.len() {
            log::debug!("vertex removal at {index} outside path, ignoring");
            return;
        }
        active.path.remove(index);
        self.sync_field();
    }

    /// Mirrors the active polygon's vertices into the form field.
    ///
    /// Leaves the field untouched when no polygon is active.
    pub fn sync_field(&mut self) {
        if let Some(active) = &self.active {
            self.field.store(&active.path);
            log::debug!("boundary field synced with {} vertices", active.path.len());
        }
    }

    /// Current vertex path of the active polygon, if any.
    pub fn active_path(&self) -> Option<&[LatLng]> {
        self.active.as_ref().map(|a| a.path.as_slice())
    }

    /// True when a polygon is currently being edited.
    pub fn has_active_polygon(&self) -> bool {
        self.active.is_some()
    }

    /// The form field mirror.
    pub fn field(&self) -> &BoundaryField {
        &self.field
    }

    /// Raw serialized field content, as the form would submit it.
    pub fn field_value(&self) -> &str {
        self.field.raw()
    }
}
