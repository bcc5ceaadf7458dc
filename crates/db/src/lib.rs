//! `db` crate — pure persistence layer.
//!
//! Owns the SQLite pool, the embedded migrations for the `book` table, the
//! `BookRow` type, and one repository function per SQL statement.  No
//! business logic lives here.

pub mod error;
pub mod pool;
pub mod repository;
pub mod models;

pub use pool::DbPool;
pub use error::DbError;
pub use models::BookRow;
