//! Request handlers and the shared router state.

pub mod books;
pub mod health;

use db::DbPool;
use service::BookService;

/// State cloned into every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub books: BookService,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        Self {
            books: BookService::new(pool),
        }
    }
}
