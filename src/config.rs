/// Configuration management for Scribe Service
///
/// All configuration is loaded from environment variables (a `.env` file is
/// honored via dotenvy at startup). Production deployments must provide their
/// own signing secret and an explicit CORS origin list.
use serde::{Deserialize, Serialize};

/// Development-only cookie signing secret. Refused in production.
const DEV_SECRET_KEY: &str =
    "scribe-dev-secret-key-0123456789abcdef0123456789abcdef0123456789abcdef";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Admin credential gating post mutation
    pub auth: AuthConfig,
    /// Session cookie configuration
    pub session: SessionConfig,
    /// CORS configuration
    pub cors: CorsConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development, staging, production)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Connection URL, scheme-normalized (see [`normalize_database_url`])
    pub url: String,
    /// Max connections in pool
    pub max_connections: u32,
}

/// The single admin credential pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
}

/// Session cookie configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Signing secret for the session cookie
    pub secret_key: String,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins
    pub allowed_origins: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        let is_production = app_env.eq_ignore_ascii_case("production");

        let secret_key = match std::env::var("SECRET_KEY") {
            Ok(value) => value,
            Err(_) if is_production => {
                return Err("SECRET_KEY must be set in production".to_string())
            }
            Err(_) => DEV_SECRET_KEY.to_string(),
        };
        // The cookie key is derived from this value; actix-web requires at
        // least 32 bytes of input.
        if secret_key.len() < 32 {
            return Err("SECRET_KEY must be at least 32 bytes".to_string());
        }
        if is_production && secret_key == DEV_SECRET_KEY {
            return Err("SECRET_KEY cannot be the development default in production".to_string());
        }

        let allowed_origins = match std::env::var("CORS_ALLOWED_ORIGINS") {
            Ok(value) => value,
            Err(_) if is_production => {
                return Err("CORS_ALLOWED_ORIGINS must be set in production".to_string())
            }
            Err(_) => "*".to_string(),
        };
        if is_production && allowed_origins.trim() == "*" {
            return Err("CORS_ALLOWED_ORIGINS cannot be '*' in production".to_string());
        }

        Ok(Config {
            app: AppConfig {
                env: app_env,
                host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: std::env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8000),
            },
            database: DatabaseConfig {
                url: normalize_database_url(
                    &std::env::var("DATABASE_URL")
                        .unwrap_or_else(|_| "sqlite://scribe.db?mode=rwc".to_string()),
                ),
                max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|c| c.parse().ok())
                    .unwrap_or(5),
            },
            auth: AuthConfig {
                username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string()),
                password: std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin".to_string()),
            },
            session: SessionConfig { secret_key },
            cors: CorsConfig { allowed_origins },
        })
    }
}

/// Normalize the connection URL scheme before use. Managed platforms still
/// hand out `postgres://` URLs; the canonical scheme is `postgresql://`.
pub fn normalize_database_url(url: &str) -> String {
    if let Some(rest) = url.strip_prefix("postgres://") {
        format!("postgresql://{rest}")
    } else {
        url.to_string()
    }
}
