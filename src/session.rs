//! Session identity and flash messages.
//!
//! The session is a signed, expiring JWT carried in an HttpOnly cookie;
//! there is no server-side session table. Flash messages are one-shot
//! severity-tagged strings carried in a second cookie until the next page
//! render, then discarded.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tower_cookies::{
    cookie::{Cookie, SameSite},
    Cookies,
};

use crate::{
    error::{AppError, AppResult},
    models::user::Role,
};

/// Name of the cookie holding the signed session token.
pub const SESSION_COOKIE: &str = "librarium_session";
/// Name of the cookie holding pending flash messages.
pub const FLASH_COOKIE: &str = "librarium_flash";

// ---------------------------------------------------------------------------
// Session claims
// ---------------------------------------------------------------------------

/// Claims embedded in the session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Username
    pub sub: String,
    pub user_id: i64,
    /// Display name, shown in the navigation bar
    pub name: String,
    pub role: Role,
    pub exp: i64,
    pub iat: i64,
}

impl SessionClaims {
    /// Mint claims for a freshly authenticated user.
    pub fn new(user_id: i64, username: &str, name: &str, role: Role, expiry_hours: u64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: username.to_string(),
            user_id,
            name: name.to_string(),
            role,
            exp: now + (expiry_hours as i64 * 3600),
            iat: now,
        }
    }

    /// Sign the claims into a session token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse and verify a session token
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }

    /// Guard for librarian-only operations.
    pub fn require_librarian(&self) -> AppResult<()> {
        if self.role == Role::Librarian {
            Ok(())
        } else {
            Err(AppError::AccessDenied)
        }
    }
}

/// Build the HttpOnly cookie carrying a session token.
pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Build the removal cookie that clears the session.
pub fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .build()
}

// ---------------------------------------------------------------------------
// Flash messages
// ---------------------------------------------------------------------------

/// Flash severity, mapped onto alert CSS classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Success,
    Info,
    Warning,
    Danger,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Success => "success",
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Danger => "danger",
        }
    }
}

/// A one-shot status message shown on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: Level,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: Level::Success, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { level: Level::Info, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: Level::Warning, message: message.into() }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self { level: Level::Danger, message: message.into() }
    }
}

/// Encode a flash list into its cookie value (URL-safe base64 of JSON).
pub fn encode_flashes(flashes: &[Flash]) -> String {
    let json = serde_json::to_vec(flashes).unwrap_or_default();
    URL_SAFE_NO_PAD.encode(json)
}

/// Decode a flash cookie value; garbage decodes to no messages.
pub fn decode_flashes(value: &str) -> Vec<Flash> {
    URL_SAFE_NO_PAD
        .decode(value)
        .ok()
        .and_then(|json| serde_json::from_slice(&json).ok())
        .unwrap_or_default()
}

/// Build the cookie carrying the given flashes.
pub fn flash_cookie(flashes: &[Flash]) -> Cookie<'static> {
    Cookie::build((FLASH_COOKIE, encode_flashes(flashes)))
        .path("/")
        .build()
}

/// Queue a flash message for the next page render.
pub fn push_flash(cookies: &Cookies, flash: Flash) {
    let mut flashes = cookies
        .get(FLASH_COOKIE)
        .map(|c| decode_flashes(c.value()))
        .unwrap_or_default();
    flashes.push(flash);
    cookies.add(flash_cookie(&flashes));
}

/// Read and clear the pending flash messages.
pub fn take_flashes(cookies: &Cookies) -> Vec<Flash> {
    let flashes = cookies
        .get(FLASH_COOKIE)
        .map(|c| decode_flashes(c.value()))
        .unwrap_or_default();
    if !flashes.is_empty() {
        cookies.remove(Cookie::build((FLASH_COOKIE, "")).path("/").build());
    }
    flashes
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn token_round_trip() {
        let claims = SessionClaims::new(7, "amina", "Amina Khan", Role::Librarian, 1);
        let token = claims.create_token(SECRET).unwrap();
        let parsed = SessionClaims::from_token(&token, SECRET).unwrap();
        assert_eq!(parsed.user_id, 7);
        assert_eq!(parsed.sub, "amina");
        assert_eq!(parsed.role, Role::Librarian);
    }

    #[test]
    fn token_rejects_wrong_secret() {
        let claims = SessionClaims::new(1, "amina", "Amina Khan", Role::Student, 1);
        let token = claims.create_token(SECRET).unwrap();
        assert!(SessionClaims::from_token(&token, "other-secret").is_err());
    }

    #[test]
    fn expired_token_rejected() {
        let mut claims = SessionClaims::new(1, "amina", "Amina Khan", Role::Student, 1);
        claims.exp = Utc::now().timestamp() - 3600;
        let token = claims.create_token(SECRET).unwrap();
        assert!(SessionClaims::from_token(&token, SECRET).is_err());
    }

    #[test]
    fn require_librarian_checks_role() {
        let librarian = SessionClaims::new(1, "a", "A", Role::Librarian, 1);
        let student = SessionClaims::new(2, "b", "B", Role::Student, 1);
        assert!(librarian.require_librarian().is_ok());
        assert!(matches!(
            student.require_librarian(),
            Err(AppError::AccessDenied)
        ));
    }

    #[test]
    fn flash_round_trip() {
        let flashes = vec![
            Flash::success("Book issued."),
            Flash::warning("Access denied: Librarian only area."),
        ];
        let decoded = decode_flashes(&encode_flashes(&flashes));
        assert_eq!(decoded, flashes);
    }

    #[test]
    fn garbage_flash_cookie_decodes_empty() {
        assert!(decode_flashes("not base64 at all!").is_empty());
    }
}
