//! Catalog service: students and books
//!
//! Storage and listing only; the role checks guarding the mutating
//! operations live at the route layer.

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{AddBookForm, Book},
        student::{AddStudentForm, Student},
    },
    repository::Repository,
};

/// Empty or whitespace-only optional fields store as NULL.
fn normalize(field: Option<String>) -> Option<String> {
    field
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// All students, newest first
    pub async fn list_students(&self) -> AppResult<Vec<Student>> {
        self.repository.students.list_all().await
    }

    /// All books, newest first
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list_all().await
    }

    /// Books currently available for issue
    pub async fn list_available_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list_available().await
    }

    /// Add a student. Only the name is required; there is deliberately no
    /// duplicate-roll-number check.
    pub async fn add_student(&self, mut form: AddStudentForm) -> AppResult<i64> {
        form.name = form.name.trim().to_string();
        form.validate()
            .map_err(|_| AppError::Validation("Please fill all required fields.".to_string()))?;

        self.repository
            .students
            .insert(
                &form.name,
                normalize(form.roll_no).as_deref(),
                normalize(form.course).as_deref(),
                normalize(form.contact).as_deref(),
            )
            .await
    }

    /// Add a book; new books start available.
    pub async fn add_book(&self, mut form: AddBookForm) -> AppResult<i64> {
        form.title = form.title.trim().to_string();
        form.validate()
            .map_err(|_| AppError::Validation("Please fill all required fields.".to_string()))?;

        self.repository
            .books
            .insert(
                &form.title,
                normalize(form.author).as_deref(),
                normalize(form.publisher).as_deref(),
            )
            .await
    }
}
