use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::web;
use tempfile::NamedTempFile;

use scribe_service::config::{
    AppConfig, AuthConfig, Config, CorsConfig, DatabaseConfig, SessionConfig,
};
use scribe_service::{db, AppState};

pub const TEST_SECRET: &str =
    "scribe-test-secret-key-0123456789abcdef0123456789abcdef0123456789abcdef";

/// Build an application state over a throwaway SQLite file. The tempfile
/// guard must be kept alive for the duration of the test.
pub async fn build_state() -> (web::Data<AppState>, NamedTempFile) {
    let db_file = NamedTempFile::new().expect("create temp database file");
    let url = format!("sqlite://{}?mode=rwc", db_file.path().display());

    let config = Config {
        app: AppConfig {
            env: "test".to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: url.clone(),
            max_connections: 2,
        },
        auth: AuthConfig {
            username: "admin".to_string(),
            password: "admin".to_string(),
        },
        session: SessionConfig {
            secret_key: TEST_SECRET.to_string(),
        },
        cors: CorsConfig {
            allowed_origins: "*".to_string(),
        },
    };

    let pool = db::connect(&config.database).await.expect("connect store");
    db::init_schema(&pool, &url).await.expect("init schema");

    (web::Data::new(AppState { db: pool, config }), db_file)
}

/// Pull the signed session cookie out of a response.
pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Cookie<'static> {
    resp.response()
        .cookies()
        .find(|c| c.name() == "id")
        .expect("session cookie")
        .into_owned()
}
