//! Error types for Librarium
//!
//! Every error is recovered at the request boundary: the client is
//! redirected and shown a one-shot flash message. None are fatal to the
//! process.

use axum::{
    http::header::SET_COOKIE,
    response::{IntoResponse, Redirect, Response},
};
use thiserror::Error;

use crate::session::{flash_cookie, Flash};

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Bad credentials at login
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// No session present on a login-protected route
    #[error("login required")]
    Unauthenticated,

    /// Session present but role check failed
    #[error("access denied")]
    AccessDenied,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Message safe to show to the user, for errors handlers surface as
    /// flashes on the submitting form.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Authentication(msg)
            | AppError::NotFound(msg)
            | AppError::Validation(msg)
            | AppError::Conflict(msg) => msg.clone(),
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }
}

/// Redirect to `to` with a flash set directly on the response.
///
/// Used where no cookie jar is in scope (the error boundary); handlers
/// with a jar go through `session::push_flash` instead.
pub fn flash_redirect(to: &str, flash: Flash) -> Response {
    let cookie = flash_cookie(&[flash]);
    ([(SET_COOKIE, cookie.to_string())], Redirect::to(to)).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Unauthenticated => Redirect::to("/login").into_response(),
            AppError::Authentication(msg) => flash_redirect("/login", Flash::danger(msg)),
            AppError::AccessDenied => {
                flash_redirect("/", Flash::warning("Access denied: Librarian only area."))
            }
            AppError::NotFound(msg)
            | AppError::Validation(msg)
            | AppError::Conflict(msg) => flash_redirect("/", Flash::danger(msg)),
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                flash_redirect("/", Flash::danger("Something went wrong. Please try again."))
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                flash_redirect("/", Flash::danger("Something went wrong. Please try again."))
            }
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
