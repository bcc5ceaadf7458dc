//! `book-board` CLI entry-point.
//!
//! Available sub-commands:
//! - `serve`   — run migrations, then start the API server.
//! - `migrate` — run pending database migrations.

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "book-board", about = "CRUD service for book records", version)]
struct Cli {
    /// SQLite connection string; the file is created if missing.
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite:book_board.db", global = true)]
    database_url: String,

    /// Connection pool ceiling.
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = 5, global = true)]
    max_connections: u32,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the REST API server.
    Serve {
        #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
        bind: String,
    },
    /// Run pending database migrations.
    Migrate,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let pool = db::pool::create_pool(&cli.database_url, cli.max_connections)
        .await
        .context("failed to connect to database")?;

    match cli.command {
        Command::Serve { bind } => {
            db::pool::run_migrations(&pool)
                .await
                .context("migration failed")?;
            info!("Starting API server on {bind}");
            api::serve(&bind, pool)
                .await
                .with_context(|| format!("server on {bind} failed"))?;
        }
        Command::Migrate => {
            info!("Running migrations against {}", cli.database_url);
            db::pool::run_migrations(&pool)
                .await
                .context("migration failed")?;
            info!("Migrations applied successfully");
        }
    }

    Ok(())
}
