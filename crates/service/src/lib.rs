//! `service` crate — domain models and the transaction-scoped book service.

pub mod models;
pub mod error;
pub mod books;

pub use models::{Book, BookInput};
pub use error::BookError;
pub use books::BookService;
