//! HTTP surface: session extractors and the router
//!
//! The two guards of the application are modelled as extractors:
//! `SessionUser` ("must be logged in") and `Librarian` ("must hold the
//! librarian role"). Their rejections are `AppError` values, which the
//! error boundary turns into redirects.

pub mod auth;
pub mod catalog;
pub mod health;
pub mod loans;
pub mod pages;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    routing::{get, post},
    Router,
};
use tower_cookies::{CookieManagerLayer, Cookies};
use tower_http::trace::TraceLayer;

use crate::{
    error::AppError,
    session::{SessionClaims, SESSION_COOKIE},
    AppState,
};

/// Extractor for an authenticated session; rejects with a redirect to
/// the login page.
pub struct SessionUser(pub SessionClaims);

#[async_trait]
impl FromRequestParts<AppState> for SessionUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let cookies = parts
            .extensions
            .get::<Cookies>()
            .cloned()
            .ok_or_else(|| AppError::Internal("cookie layer not installed".to_string()))?;

        let token = cookies
            .get(SESSION_COOKIE)
            .ok_or(AppError::Unauthenticated)?;

        // An invalid or expired token reads as "not logged in".
        let claims = SessionClaims::from_token(token.value(), &state.config.session.secret)
            .map_err(|_| AppError::Unauthenticated)?;

        Ok(SessionUser(claims))
    }
}

/// Extractor for a librarian session; a logged-in non-librarian rejects
/// with an access-denied redirect.
pub struct Librarian(pub SessionClaims);

#[async_trait]
impl FromRequestParts<AppState> for Librarian {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let SessionUser(claims) = SessionUser::from_request_parts(parts, state).await?;
        claims.require_librarian()?;
        Ok(Librarian(claims))
    }
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/register", get(auth::register_page).post(auth::register_submit))
        .route("/login", get(auth::login_page).post(auth::login_submit))
        .route("/logout", get(auth::logout))
        .route("/students", get(catalog::students_page))
        .route("/add_student", post(catalog::add_student))
        .route("/books", get(catalog::books_page))
        .route("/add_book", post(catalog::add_book))
        .route("/issue", get(loans::issue_page))
        .route("/issue_book", post(loans::issue_book))
        .route("/return_book/:issue_id", get(loans::return_book))
        .route("/dashboard", get(pages::dashboard))
        .route("/health", get(health::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
