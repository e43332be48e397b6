//! Book record model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A book in the catalog. `available` is denormalized: it is false iff an
/// open loan references the book, maintained transactionally by the loan
/// ledger.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Book {
    pub book_id: i64,
    pub title: String,
    pub author: Option<String>,
    pub publisher: Option<String>,
    pub available: bool,
}

/// Add-book form. New books start available.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddBookForm {
    #[validate(length(min = 1))]
    pub title: String,
    pub author: Option<String>,
    pub publisher: Option<String>,
}
