//! Dashboard handlers

use axum::extract::State;
use maud::Markup;
use tower_cookies::Cookies;

use crate::{
    error::AppResult,
    session::take_flashes,
    views,
    AppState,
};

use super::SessionUser;

/// Public landing page with the library counters.
pub async fn home(
    State(state): State<AppState>,
    cookies: Cookies,
    session: Option<SessionUser>,
) -> AppResult<Markup> {
    let stats = state.services.stats.dashboard().await?;
    let flashes = take_flashes(&cookies);
    let claims = session.as_ref().map(|s| &s.0);
    Ok(views::pages::home(claims, &flashes, &stats))
}

/// Static protected page.
pub async fn dashboard(cookies: Cookies, SessionUser(session): SessionUser) -> Markup {
    let flashes = take_flashes(&cookies);
    views::pages::dashboard(&session, &flashes)
}
