//! `api` crate — HTTP REST API layer.
//!
//! Exposes:
//!   POST   /book
//!   GET    /book
//!   GET    /book/:id
//!   PUT    /book/:id
//!   DELETE /book/:id
//!   GET    /health

pub mod error;
pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::info;

use db::DbPool;

pub use error::ApiError;
pub use handlers::AppState;

/// Build the application router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/book", post(handlers::books::create).get(handlers::books::list))
        .route(
            "/book/:id",
            get(handlers::books::get)
                .put(handlers::books::update)
                .delete(handlers::books::delete),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `bind` and serve the API until the process is stopped.
pub async fn serve(bind: &str, pool: DbPool) -> std::io::Result<()> {
    let app = router(AppState::new(pool));
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await
}
