use anyhow::Result;

// ============================================================================
// Configuration Constants
// ============================================================================

const DEFAULT_PORT: u16 = 3000;

// Default token lifetime for the static catalog credential
const DEFAULT_JWT_EXPIRES_IN_DAYS: i64 = 60;

// Database pool defaults
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Clone, Debug)]
pub struct Config {
    /// HTTP listen port
    pub port: u16,
    /// Postgres connection string
    pub database_url: String,
    /// Shared secret for signing and verifying bearer tokens (HS256)
    pub jwt_secret: String,
    /// Lifetime of issued tokens, in days
    pub jwt_expires_in_days: i64,
    /// Maximum number of connections in the database pool
    pub db_max_connections: u32,
    /// Log filter directive (RUST_LOG syntax)
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            database_url: std::env::var("DATABASE_URL")?,
            jwt_secret: {
                let secret = std::env::var("JWT_SECRET")?;
                if secret.len() < 32 {
                    anyhow::bail!("JWT_SECRET must be at least 32 characters long");
                }
                secret
            },
            jwt_expires_in_days: std::env::var("JWT_EXPIRES_IN_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_JWT_EXPIRES_IN_DAYS),
            db_max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
