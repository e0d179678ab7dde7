//! SQLite-backed registry of pricing zones.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use crate::field;
use crate::geometry::LatLng;
use crate::zone::PricingZone;

/// Filter for zone queries; the default filter matches everything.
#[derive(Debug, Default)]
pub struct ZoneFilter {
    pub name_contains: Option<String>,
    pub active_only: bool,
}

/// Registry handle over one SQLite database file.
///
/// The boundary column stores the same JSON encoding the form field
/// carries, so records round-trip through [`crate::field`].
pub struct ZoneDb {
    conn: Connection,
}

impl ZoneDb {
    /// Opens the registry, creating the schema when missing.
    pub fn open(path: &str) -> rusqlite::Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS zones (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                description TEXT,
                is_active INTEGER NOT NULL,
                boundary TEXT NOT NULL,
                created_at TEXT NOT NULL
            )",
        )?;
        Ok(Self { conn })
    }

    /// Inserts a zone and returns its new row id.
    pub fn insert(&self, zone: &PricingZone) -> rusqlite::Result<i64> {
        self.conn.execute(
            "INSERT INTO zones (name, description, is_active, boundary, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                zone.name,
                zone.description,
                zone.is_active,
                field::serialize_boundary(&zone.boundary),
                zone.created_at.to_rfc3339(),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Fetches a single zone by id.
    pub fn get(&self, id: i64) -> rusqlite::Result<Option<PricingZone>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, description, is_active, boundary, created_at
             FROM zones WHERE id = ?1",
        )?;
        let mut rows = stmt.query_map(params![id], row_to_zone)?;
        rows.next().transpose()
    }

    /// Returns all zones matching `filter`, in insertion order.
    pub fn query(&self, filter: &ZoneFilter) -> rusqlite::Result<Vec<PricingZone>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, description, is_active, boundary, created_at
             FROM zones ORDER BY id",
        )?;
        let rows = stmt.query_map([], row_to_zone)?;
        let mut res = Vec::new();
        for r in rows {
            let zone = r?;
            if filter.active_only && !zone.is_active {
                continue;
            }
            if let Some(ref needle) = filter.name_contains {
                if !zone
                    .name
                    .to_lowercase()
                    .contains(&needle.to_lowercase())
                {
                    continue;
                }
            }
            res.push(zone);
        }
        Ok(res)
    }

    /// Overwrites the stored boundary for `id`; returns whether a row changed.
    pub fn update_boundary(&self, id: i64, boundary: &[LatLng]) -> rusqlite::Result<bool> {
        let n = self.conn.execute(
            "UPDATE zones SET boundary = ?1 WHERE id = ?2",
            params![field::serialize_boundary(boundary), id],
        )?;
        Ok(n > 0)
    }

    /// Sets the active flag for `id`; returns whether a row changed.
    pub fn set_active(&self, id: i64, active: bool) -> rusqlite::Result<bool> {
        let n = self.conn.execute(
            "UPDATE zones SET is_active = ?1 WHERE id = ?2",
            params![active, id],
        )?;
        Ok(n > 0)
    }

    /// Deletes the zone with `id`; returns whether a row was removed.
    pub fn delete(&self, id: i64) -> rusqlite::Result<bool> {
        let n = self
            .conn
            .execute("DELETE FROM zones WHERE id = ?1", params![id])?;
        Ok(n > 0)
    }
}

fn row_to_zone(row: &rusqlite::Row) -> rusqlite::Result<PricingZone> {
    let boundary_json: String = row.get(4)?;
    let created_raw: String = row.get(5)?;
    let created_at = DateTime::parse_from_rfc3339(&created_raw)
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(5, rusqlite::types::Type::Text, Box::new(e))
        })?
        .with_timezone(&Utc);
    Ok(PricingZone {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        is_active: row.get(3)?,
        boundary: field::parse_boundary(&boundary_json),
        created_at,
    })
}
