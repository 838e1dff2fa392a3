/// Default OMDb endpoint.
pub const DEFAULT_OMDB_BASE_URL: &str = "https://www.omdbapi.com";

/// Admin account to create or promote before importing.
#[derive(Debug, Clone)]
pub struct AdminSeed {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Seeder configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub database_url: Option<String>,
    /// Required unless `skip_movies` is set.
    pub omdb_api_key: Option<String>,
    pub omdb_base_url: String,
    pub admin: Option<AdminSeed>,
    pub skip_movies: bool,
}

impl SeedConfig {
    /// | Env Var               | Default                  |
    /// |-----------------------|--------------------------|
    /// | `DATABASE_URL`        | --                       |
    /// | `OMDB_API_KEY`        | --                       |
    /// | `OMDB_BASE_URL`       | `https://www.omdbapi.com`|
    /// | `SEED_ADMIN_EMAIL`    | --                       |
    /// | `SEED_ADMIN_PASSWORD` | --                       |
    /// | `SEED_ADMIN_USERNAME` | `admin`                  |
    /// | `SEED_SKIP_MOVIES`    | unset                    |
    ///
    /// The admin account is only seeded when both email and password are set.
    pub fn from_env() -> Self {
        let var = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());

        let admin = match (var("SEED_ADMIN_EMAIL"), var("SEED_ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(AdminSeed {
                username: var("SEED_ADMIN_USERNAME").unwrap_or_else(|| "admin".into()),
                email,
                password,
            }),
            _ => None,
        };

        Self {
            database_url: var("DATABASE_URL"),
            omdb_api_key: var("OMDB_API_KEY"),
            omdb_base_url: var("OMDB_BASE_URL").unwrap_or_else(|| DEFAULT_OMDB_BASE_URL.into()),
            admin,
            skip_movies: var("SEED_SKIP_MOVIES").is_some_and(|v| is_truthy(&v)),
        }
    }
}

fn is_truthy(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falsy_flags() {
        assert!(!is_truthy("0"));
        assert!(!is_truthy("False"));
        assert!(is_truthy("1"));
        assert!(is_truthy("yes"));
    }
}
