//! Transaction-scoped book operations.
//!
//! `BookService` is the store object handed to the API layer.  Reads go
//! straight to the pool; every write runs inside its own transaction so a
//! failed request leaves no partial change behind.

use tracing::{info, instrument};

use db::repository::books as book_repo;
use db::DbPool;

use crate::{Book, BookError, BookInput};

#[derive(Debug, Clone)]
pub struct BookService {
    pool: DbPool,
}

impl BookService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Persist a new book and return it with its assigned id.
    #[instrument(skip(self, input))]
    pub async fn save(&self, input: BookInput) -> Result<Book, BookError> {
        let mut tx = self.pool.begin().await?;
        let row = book_repo::create_book(&mut *tx, &input.title, &input.author).await?;
        tx.commit().await?;

        info!(id = row.id, "book created");
        Ok(row.into())
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i64) -> Result<Book, BookError> {
        let row = book_repo::get_book(&self.pool, id)
            .await
            .map_err(BookError::for_id(id))?;
        Ok(row.into())
    }

    #[instrument(skip(self))]
    pub async fn find_all(&self) -> Result<Vec<Book>, BookError> {
        let rows = book_repo::list_books(&self.pool).await?;
        Ok(rows.into_iter().map(Book::from).collect())
    }

    /// Overwrite title and author of an existing book.  The id is untouched.
    #[instrument(skip(self, input))]
    pub async fn edit(&self, id: i64, input: BookInput) -> Result<Book, BookError> {
        let mut tx = self.pool.begin().await?;
        let row = book_repo::update_book(&mut *tx, id, &input.title, &input.author)
            .await
            .map_err(BookError::for_id(id))?;
        tx.commit().await?;

        info!(id, "book edited");
        Ok(row.into())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), BookError> {
        let mut tx = self.pool.begin().await?;
        book_repo::delete_book(&mut *tx, id)
            .await
            .map_err(BookError::for_id(id))?;
        tx.commit().await?;

        info!(id, "book deleted");
        Ok(())
    }

    pub async fn count(&self) -> Result<i64, BookError> {
        Ok(book_repo::count_books(&self.pool).await?)
    }
}
