//! Loans repository for database operations
//!
//! The ledger write and the availability-flag write always happen inside
//! one transaction, so the `books.available` denormalization cannot drift
//! from the set of open records.

use chrono::NaiveDate;
use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::loan::{LoanRecord, LoanRecordDetails},
};

#[derive(Clone)]
pub struct LoansRepository {
    pool: Pool<Sqlite>,
}

impl LoansRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Get a ledger record by id
    pub async fn get_by_id(&self, issue_id: i64) -> AppResult<LoanRecord> {
        sqlx::query_as::<_, LoanRecord>("SELECT * FROM issue_records WHERE issue_id = ?")
            .bind(issue_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Record not found.".to_string()))
    }

    /// Open a loan: claim the book and insert the ledger row atomically.
    ///
    /// The availability flip is a compare-and-swap, so of two racing
    /// issues for the same book exactly one succeeds.
    pub async fn issue(
        &self,
        student_id: i64,
        book_id: i64,
        issue_date: NaiveDate,
    ) -> AppResult<i64> {
        let mut tx = self.pool.begin().await?;

        let student_exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM students WHERE student_id = ?)",
        )
        .bind(student_id)
        .fetch_one(&mut *tx)
        .await?;

        if !student_exists {
            return Err(AppError::NotFound("Student not found.".to_string()));
        }

        let claimed = sqlx::query(
            "UPDATE books SET available = 0 WHERE book_id = ? AND available = 1",
        )
        .bind(book_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if claimed == 0 {
            // Missing book or already out; either way nothing to issue.
            return Err(AppError::Conflict("Book is not available.".to_string()));
        }

        let result = sqlx::query(
            "INSERT INTO issue_records (student_id, book_id, issue_date) VALUES (?, ?, ?)",
        )
        .bind(student_id)
        .bind(book_id)
        .bind(issue_date)
        .execute(&mut *tx)
        .await?;

        let issue_id = result.last_insert_rowid();
        tx.commit().await?;

        Ok(issue_id)
    }

    /// Close an open loan: set the return date and release the book
    /// atomically. Re-returning a closed record is rejected.
    pub async fn close(&self, issue_id: i64, return_date: NaiveDate) -> AppResult<LoanRecord> {
        let mut tx = self.pool.begin().await?;

        let record = sqlx::query_as::<_, LoanRecord>(
            "SELECT * FROM issue_records WHERE issue_id = ?",
        )
        .bind(issue_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Record not found.".to_string()))?;

        if record.return_date.is_some() {
            return Err(AppError::Conflict("Book already returned.".to_string()));
        }

        sqlx::query("UPDATE issue_records SET return_date = ? WHERE issue_id = ?")
            .bind(return_date)
            .bind(issue_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE books SET available = 1 WHERE book_id = ?")
            .bind(record.book_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(LoanRecord {
            return_date: Some(return_date),
            ..record
        })
    }

    /// All ledger rows joined with student name and book title, newest
    /// first. Outer joins: dangling ids show as NULL fields.
    pub async fn list_details(&self) -> AppResult<Vec<LoanRecordDetails>> {
        let records = sqlx::query_as::<_, LoanRecordDetails>(
            r#"
            SELECT r.issue_id, r.student_id, r.book_id, r.issue_date, r.return_date,
                   s.name AS student_name, b.title AS book_title
            FROM issue_records r
            LEFT JOIN students s ON s.student_id = r.student_id
            LEFT JOIN books b ON b.book_id = r.book_id
            ORDER BY r.issue_id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Count open loans
    pub async fn count_open(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM issue_records WHERE return_date IS NULL",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}
