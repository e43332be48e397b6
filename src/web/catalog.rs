//! Student and book handlers

use axum::{extract::State, response::Redirect, Form};
use maud::Markup;
use tower_cookies::Cookies;

use crate::{
    error::{AppError, AppResult},
    models::{book::AddBookForm, student::AddStudentForm},
    session::{push_flash, take_flashes, Flash},
    views,
    AppState,
};

use super::{Librarian, SessionUser};

pub async fn students_page(
    State(state): State<AppState>,
    cookies: Cookies,
    SessionUser(session): SessionUser,
) -> AppResult<Markup> {
    let students = state.services.catalog.list_students().await?;
    let flashes = take_flashes(&cookies);
    Ok(views::catalog::students_page(&session, &flashes, &students))
}

pub async fn add_student(
    State(state): State<AppState>,
    cookies: Cookies,
    Librarian(_): Librarian,
    Form(form): Form<AddStudentForm>,
) -> AppResult<Redirect> {
    match state.services.catalog.add_student(form).await {
        Ok(_) => push_flash(&cookies, Flash::success("Student added.")),
        Err(e @ AppError::Validation(_)) => push_flash(&cookies, Flash::danger(e.user_message())),
        Err(e) => return Err(e),
    }
    Ok(Redirect::to("/students"))
}

pub async fn books_page(
    State(state): State<AppState>,
    cookies: Cookies,
    SessionUser(session): SessionUser,
) -> AppResult<Markup> {
    let books = state.services.catalog.list_books().await?;
    let flashes = take_flashes(&cookies);
    Ok(views::catalog::books_page(&session, &flashes, &books))
}

pub async fn add_book(
    State(state): State<AppState>,
    cookies: Cookies,
    Librarian(_): Librarian,
    Form(form): Form<AddBookForm>,
) -> AppResult<Redirect> {
    match state.services.catalog.add_book(form).await {
        Ok(_) => push_flash(&cookies, Flash::success("Book added.")),
        Err(e @ AppError::Validation(_)) => push_flash(&cookies, Flash::danger(e.user_message())),
        Err(e) => return Err(e),
    }
    Ok(Redirect::to("/books"))
}
