//! Row structs that map 1-to-1 onto database tables.
//!
//! These are *persistence* models — they carry no domain behaviour.
//! Domain types live in the `service` crate.

use sqlx::FromRow;

/// A persisted book row.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct BookRow {
    /// Assigned by SQLite on insert, never reused.
    pub id: i64,
    pub title: String,
    pub author: String,
}
