/// Typed access to the client session
///
/// The session is a single `logged_in` flag plus a list of one-shot flash
/// notices, serialized to and from the signed cookie at the request boundary.
/// Handlers never touch string keys directly; they go through [`TypedSession`].
use std::future::{ready, Ready};

use actix_session::storage::CookieSessionStore;
use actix_session::{Session, SessionExt, SessionMiddleware};
use actix_web::cookie::Key;
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::error::AppError;

pub(crate) const LOGGED_IN_KEY: &str = "logged_in";
const FLASH_KEY: &str = "_flashes";

/// Build the cookie-backed session layer from the configured signing secret.
///
/// `cookie_secure` is off because TLS termination happens in front of the
/// service; the cookie is still signed and tamper-evident.
pub fn session_middleware(secret_key: &str) -> SessionMiddleware<CookieSessionStore> {
    let key = Key::derive_from(secret_key.as_bytes());
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_secure(false)
        .build()
}

/// Append a one-shot notice for the next rendered HTML page.
pub fn push_flash(session: &Session, message: &str) -> Result<(), AppError> {
    let mut flashes = session.get::<Vec<String>>(FLASH_KEY)?.unwrap_or_default();
    flashes.push(message.to_string());
    session.insert(FLASH_KEY, flashes)?;
    Ok(())
}

/// Session wrapper carrying `{logged_in: bool}` and the flash list.
pub struct TypedSession(Session);

impl TypedSession {
    pub fn is_logged_in(&self) -> Result<bool, AppError> {
        Ok(self.0.get::<bool>(LOGGED_IN_KEY)?.unwrap_or(false))
    }

    pub fn log_in(&self) -> Result<(), AppError> {
        self.0.insert(LOGGED_IN_KEY, true)?;
        Ok(())
    }

    /// Clear the login flag. A no-op when the key is absent.
    pub fn log_out(&self) {
        self.0.remove(LOGGED_IN_KEY);
    }

    pub fn flash(&self, message: &str) -> Result<(), AppError> {
        push_flash(&self.0, message)
    }

    /// Drain the pending flash notices for rendering.
    pub fn take_flashes(&self) -> Result<Vec<String>, AppError> {
        let flashes = self.0.get::<Vec<String>>(FLASH_KEY)?.unwrap_or_default();
        self.0.remove(FLASH_KEY);
        Ok(flashes)
    }
}

impl FromRequest for TypedSession {
    type Error = actix_web::Error;
    type Future = Ready<Result<TypedSession, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(TypedSession(req.get_session())))
    }
}
