//! Books repository for database operations

use sqlx::{Pool, Sqlite};

use crate::{error::AppResult, models::book::Book};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Sqlite>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// All books, newest first
    pub async fn list_all(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>("SELECT * FROM books ORDER BY book_id DESC")
            .fetch_all(&self.pool)
            .await?;

        Ok(books)
    }

    /// Books currently available for issue, newest first
    pub async fn list_available(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT * FROM books WHERE available = 1 ORDER BY book_id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Insert a new book (available by default), returning its id
    pub async fn insert(
        &self,
        title: &str,
        author: Option<&str>,
        publisher: Option<&str>,
    ) -> AppResult<i64> {
        let result = sqlx::query(
            "INSERT INTO books (title, author, publisher, available) VALUES (?, ?, ?, 1)",
        )
        .bind(title)
        .bind(author)
        .bind(publisher)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Count all books
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
