//! TuneX Storage
//!
//! SQLite persistence layer for TuneX.
//!
//! This crate provides persistent storage for users, roles, genres, songs,
//! and playlists.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: Each feature owns its own queries and logic
//! - **Repository Invariants**: Membership uniqueness and position
//!   assignment are enforced here, inside transactions, not in handlers
//! - **Advisory Ordering**: Playlist positions are hints; they are not
//!   compacted on removal or validated on reorder
//!
//! # Example
//!
//! ```rust,no_run
//! use tunex_storage::{create_pool, run_migrations};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://tunex.db").await?;
//! run_migrations(&pool).await?;
//! tunex_storage::seed::ensure_defaults(&pool).await?;
//!
//! let songs = tunex_storage::songs::get_all(&pool).await?;
//! # Ok(())
//! # }
//! ```

// Vertical slices
pub mod genres;
pub mod playlists;
pub mod roles;
pub mod songs;
pub mod users;

// Fixed lookup data
pub mod seed;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://tunex.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}
