//! Issue and return handlers

use axum::{
    extract::{Path, State},
    response::Redirect,
    Form,
};
use maud::Markup;
use tower_cookies::Cookies;

use crate::{
    error::{AppError, AppResult},
    models::loan::IssueBookForm,
    session::{push_flash, take_flashes, Flash},
    views,
    AppState,
};

use super::{Librarian, SessionUser};

pub async fn issue_page(
    State(state): State<AppState>,
    cookies: Cookies,
    SessionUser(session): SessionUser,
) -> AppResult<Markup> {
    let students = state.services.catalog.list_students().await?;
    let available = state.services.catalog.list_available_books().await?;
    let records = state.services.loans.list_records().await?;
    let flashes = take_flashes(&cookies);
    Ok(views::loans::issue_page(
        &session, &flashes, &students, &available, &records,
    ))
}

pub async fn issue_book(
    State(state): State<AppState>,
    cookies: Cookies,
    Librarian(_): Librarian,
    Form(form): Form<IssueBookForm>,
) -> AppResult<Redirect> {
    match state.services.loans.issue(form).await {
        Ok(_) => push_flash(&cookies, Flash::success("Book issued.")),
        Err(e @ (AppError::NotFound(_) | AppError::Conflict(_))) => {
            push_flash(&cookies, Flash::danger(e.user_message()))
        }
        Err(e) => return Err(e),
    }
    Ok(Redirect::to("/issue"))
}

pub async fn return_book(
    State(state): State<AppState>,
    cookies: Cookies,
    Librarian(_): Librarian,
    Path(issue_id): Path<i64>,
) -> AppResult<Redirect> {
    match state.services.loans.return_loan(issue_id).await {
        Ok(_) => push_flash(&cookies, Flash::success("Book returned.")),
        Err(e @ (AppError::NotFound(_) | AppError::Conflict(_))) => {
            push_flash(&cookies, Flash::danger(e.user_message()))
        }
        Err(e) => return Err(e),
    }
    Ok(Redirect::to("/issue"))
}
