/// Server configuration loaded from environment variables.
///
/// Store connection strings have no safe fallback and are required; the
/// rest defaults to values suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Structured-store (PostgreSQL) connection string. Required.
    pub database_url: String,
    /// Flexible-store (MongoDB) connection string. Required.
    pub mongodb_url: String,
    /// Logical database the content collections live in.
    pub mongodb_database: String,
    /// Cache-layer (Redis) connection string.
    pub redis_url: String,
    /// Default TTL in seconds for cache entries written without an
    /// explicit expiry.
    pub redis_ttl_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                       |
    /// |------------------------|-----------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                     |
    /// | `PORT`                 | `8000`                                        |
    /// | `CORS_ORIGINS`         | `http://localhost:3000,http://127.0.0.1:3000` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                          |
    /// | `DATABASE_URL`         | (required)                                    |
    /// | `MONGODB_URL`          | (required)                                    |
    /// | `MONGODB_DATABASE`     | `wayfarer_content`                            |
    /// | `REDIS_URL`            | `redis://localhost:6379`                      |
    /// | `REDIS_TTL_SECS`       | `3600`                                        |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let mongodb_url = std::env::var("MONGODB_URL").expect("MONGODB_URL must be set");
        let mongodb_database =
            std::env::var("MONGODB_DATABASE").unwrap_or_else(|_| "wayfarer_content".into());

        let redis_url =
            std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".into());
        let redis_ttl_secs: u64 = std::env::var("REDIS_TTL_SECS")
            .unwrap_or_else(|_| "3600".into())
            .parse()
            .expect("REDIS_TTL_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
            mongodb_url,
            mongodb_database,
            redis_url,
            redis_ttl_secs,
        }
    }
}
