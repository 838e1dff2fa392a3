use catalog_core::error::CoreError;

/// Errors that abort a seeding run.
///
/// Per-title problems (unknown title, unconvertible payload, failed insert)
/// are logged and skipped rather than surfaced here.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("DATABASE_URL must be set")]
    MissingDatabaseUrl,

    #[error("OMDB_API_KEY must be set to import movies")]
    MissingApiKey,

    #[error("OMDb request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("OMDb returned HTTP {status}")]
    OmdbStatus { status: u16 },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}
