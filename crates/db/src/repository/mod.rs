//! Repository functions — one function per database operation.
//!
//! Every function takes an SQLite executor (the pool, or `&mut *tx` inside a
//! transaction) and returns a `Result<T, DbError>`.
//! No business logic, no domain types — pure SQL.

pub mod books;
