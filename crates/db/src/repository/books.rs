//! Book CRUD operations.

use sqlx::SqliteExecutor;
use tracing::debug;

use crate::{DbError, models::BookRow};

/// Insert a new book; SQLite assigns the id.
pub async fn create_book<'e, E>(executor: E, title: &str, author: &str) -> Result<BookRow, DbError>
where
    E: SqliteExecutor<'e>,
{
    let row = sqlx::query_as::<_, BookRow>(
        r#"
        INSERT INTO book (title, author)
        VALUES (?1, ?2)
        RETURNING id, title, author
        "#,
    )
    .bind(title)
    .bind(author)
    .fetch_one(executor)
    .await?;

    debug!(id = row.id, "book inserted");
    Ok(row)
}

/// Fetch a single book by its primary key.
pub async fn get_book<'e, E>(executor: E, id: i64) -> Result<BookRow, DbError>
where
    E: SqliteExecutor<'e>,
{
    let row = sqlx::query_as::<_, BookRow>(r#"SELECT id, title, author FROM book WHERE id = ?1"#)
        .bind(id)
        .fetch_optional(executor)
        .await?
        .ok_or(DbError::NotFound)?;

    Ok(row)
}

/// Return all books in insertion order.
pub async fn list_books<'e, E>(executor: E) -> Result<Vec<BookRow>, DbError>
where
    E: SqliteExecutor<'e>,
{
    let rows = sqlx::query_as::<_, BookRow>(r#"SELECT id, title, author FROM book ORDER BY id ASC"#)
        .fetch_all(executor)
        .await?;

    Ok(rows)
}

/// Overwrite `title` and `author` of an existing book.
///
/// Returns `DbError::NotFound` if no row has that id.
pub async fn update_book<'e, E>(
    executor: E,
    id: i64,
    title: &str,
    author: &str,
) -> Result<BookRow, DbError>
where
    E: SqliteExecutor<'e>,
{
    let row = sqlx::query_as::<_, BookRow>(
        r#"
        UPDATE book
        SET title = ?1, author = ?2
        WHERE id = ?3
        RETURNING id, title, author
        "#,
    )
    .bind(title)
    .bind(author)
    .bind(id)
    .fetch_optional(executor)
    .await?
    .ok_or(DbError::NotFound)?;

    debug!(id, "book updated");
    Ok(row)
}

/// Permanently delete a book by its primary key.
///
/// Returns `DbError::NotFound` if no row was deleted.
pub async fn delete_book<'e, E>(executor: E, id: i64) -> Result<(), DbError>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM book WHERE id = ?1")
        .bind(id)
        .execute(executor)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::NotFound);
    }

    debug!(id, "book deleted");
    Ok(())
}

/// Number of stored books.
pub async fn count_books<'e, E>(executor: E) -> Result<i64, DbError>
where
    E: SqliteExecutor<'e>,
{
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM book")
        .fetch_one(executor)
        .await?;

    Ok(count)
}
