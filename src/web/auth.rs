//! Registration, login, and logout handlers

use axum::{
    extract::State,
    response::Redirect,
    Form,
};
use maud::Markup;
use tower_cookies::Cookies;

use crate::{
    error::{AppError, AppResult},
    models::user::{LoginForm, RegisterForm},
    session::{clear_session_cookie, push_flash, session_cookie, take_flashes, Flash},
    views,
    AppState,
};

pub async fn register_page(cookies: Cookies) -> Markup {
    let flashes = take_flashes(&cookies);
    views::auth::register_page(&flashes)
}

pub async fn register_submit(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(form): Form<RegisterForm>,
) -> AppResult<Redirect> {
    match state.services.auth.register(form).await {
        Ok(_) => {
            push_flash(&cookies, Flash::success("Registration successful. Please login."));
            Ok(Redirect::to("/login"))
        }
        Err(e @ (AppError::Validation(_) | AppError::Conflict(_))) => {
            push_flash(&cookies, Flash::danger(e.user_message()));
            Ok(Redirect::to("/register"))
        }
        Err(e) => Err(e),
    }
}

pub async fn login_page(cookies: Cookies) -> Markup {
    let flashes = take_flashes(&cookies);
    views::auth::login_page(&flashes)
}

pub async fn login_submit(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(form): Form<LoginForm>,
) -> AppResult<Redirect> {
    match state.services.auth.login(form).await {
        Ok((token, user)) => {
            cookies.add(session_cookie(token));
            push_flash(&cookies, Flash::success(format!("Welcome {}!", user.name)));
            Ok(Redirect::to("/"))
        }
        Err(e @ AppError::Authentication(_)) => {
            push_flash(&cookies, Flash::danger(e.user_message()));
            Ok(Redirect::to("/login"))
        }
        Err(e) => Err(e),
    }
}

/// Clears the session unconditionally; safe to hit while logged out.
pub async fn logout(cookies: Cookies) -> Redirect {
    cookies.remove(clear_session_cookie());
    push_flash(&cookies, Flash::info("Logged out successfully."));
    Redirect::to("/")
}
