//! Seeding routines run by the `catalog-seed` binary.

use catalog_api::auth::password::hash_password;
use catalog_core::account::normalize_email;
use catalog_core::roles::Role;
use catalog_db::models::user::{CreateUser, User};
use catalog_db::repositories::{MovieRepo, UserRepo};
use catalog_db::DbPool;

use crate::config::{AdminSeed, SeedConfig};
use crate::error::SeedError;
use crate::omdb::OmdbClient;
use crate::titles::SEED_TITLES;

const SEED_POOL_SIZE: u32 = 5;

/// Outcome of a movie import.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub removed: u64,
    pub added: usize,
    pub skipped: Vec<String>,
}

/// Connect, migrate, bootstrap the admin and import [`SEED_TITLES`].
///
/// The pool is closed whether or not the run succeeds.
pub async fn run(config: &SeedConfig) -> Result<SeedReport, SeedError> {
    let database_url = config
        .database_url
        .as_deref()
        .ok_or(SeedError::MissingDatabaseUrl)?;
    let pool = catalog_db::create_pool(database_url, SEED_POOL_SIZE).await?;
    tracing::info!("Connected to database");

    let outcome = seed_catalog(&pool, config).await;
    pool.close().await;
    outcome
}

async fn seed_catalog(pool: &DbPool, config: &SeedConfig) -> Result<SeedReport, SeedError> {
    catalog_db::run_migrations(pool).await?;

    if let Some(admin) = &config.admin {
        bootstrap_admin(pool, admin).await?;
    }

    if config.skip_movies {
        tracing::info!("SEED_SKIP_MOVIES set, not importing movies");
        return Ok(SeedReport::default());
    }

    let api_key = config.omdb_api_key.as_deref().ok_or(SeedError::MissingApiKey)?;
    let omdb = OmdbClient::new(config.omdb_base_url.as_str());
    seed_movies(pool, &omdb, api_key, SEED_TITLES).await
}

/// Create the admin account, or promote an existing account with that email.
pub async fn bootstrap_admin(pool: &DbPool, admin: &AdminSeed) -> Result<User, SeedError> {
    let email = normalize_email(&admin.email);

    if let Some(existing) = UserRepo::find_by_email(pool, &email).await? {
        if existing.role()? != Role::Admin {
            UserRepo::set_role(pool, existing.id, Role::Admin).await?;
            tracing::info!(user_id = existing.id, "Promoted existing account to admin");
        } else {
            tracing::info!(user_id = existing.id, "Admin account already present");
        }
        return UserRepo::find_by_id(pool, existing.id)
            .await?
            .ok_or(SeedError::Database(sqlx::Error::RowNotFound));
    }

    let password_hash =
        hash_password(&admin.password).map_err(|e| SeedError::PasswordHash(e.to_string()))?;
    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: admin.username.trim().to_string(),
            email,
            password_hash,
            role: Role::Admin,
        },
    )
    .await?;
    tracing::info!(user_id = user.id, username = %user.username, "Created admin account");
    Ok(user)
}

/// Replace the catalog with the given titles fetched from OMDb.
///
/// Unknown titles and records that fail conversion or insertion are logged
/// and listed in [`SeedReport::skipped`].
pub async fn seed_movies(
    pool: &DbPool,
    omdb: &OmdbClient,
    api_key: &str,
    titles: &[&str],
) -> Result<SeedReport, SeedError> {
    let mut report = SeedReport {
        removed: MovieRepo::delete_all(pool).await?,
        ..SeedReport::default()
    };
    tracing::info!(removed = report.removed, "Old movies removed");

    for &title in titles {
        let Some(record) = omdb.fetch_by_title(title, api_key).await? else {
            tracing::warn!(title, "Movie not found on OMDb");
            report.skipped.push(title.to_string());
            continue;
        };

        let input = match record.to_new_movie() {
            Ok(input) => input,
            Err(e) => {
                tracing::warn!(title, error = %e, "Skipping unconvertible OMDb record");
                report.skipped.push(title.to_string());
                continue;
            }
        };

        match MovieRepo::create(pool, &input).await {
            Ok(movie) => {
                tracing::info!(movie_id = movie.id, title = %movie.title, "Added movie");
                report.added += 1;
            }
            Err(e) => {
                tracing::warn!(title, error = %e, "Failed to insert movie");
                report.skipped.push(title.to_string());
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_OMDB_BASE_URL;
    use assert_matches::assert_matches;

    #[tokio::test]
    async fn missing_database_url_stops_before_connecting() {
        let config = SeedConfig {
            database_url: None,
            omdb_api_key: Some("key".into()),
            omdb_base_url: DEFAULT_OMDB_BASE_URL.into(),
            admin: None,
            skip_movies: false,
        };

        assert_matches!(run(&config).await, Err(SeedError::MissingDatabaseUrl));
    }
}
