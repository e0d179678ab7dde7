//! Core library for the zone boundary editor.
//!
//! Captures a single operator-drawn polygon over a map surface and keeps a
//! serialized form-field mirror in sync after every completed edit. The
//! surrounding modules carry the pricing-zone records the boundaries belong
//! to, their SQLite registry and the GeoJSON interchange used by the CLI.

pub mod editor;
pub mod field;
pub mod geometry;
pub mod io;
pub mod map;
pub mod push;
pub mod zone;
pub mod zone_db;
