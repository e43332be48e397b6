//! Loan ledger models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the issue ledger. Open while `return_date` is NULL, closed
/// once it is set; rows are never deleted.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct LoanRecord {
    pub issue_id: i64,
    pub student_id: i64,
    pub book_id: i64,
    pub issue_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
}

impl LoanRecord {
    pub fn is_open(&self) -> bool {
        self.return_date.is_none()
    }
}

/// A ledger row joined with student name and book title for display.
/// The joins are outer: a dangling student or book id shows as None.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct LoanRecordDetails {
    pub issue_id: i64,
    pub student_id: i64,
    pub book_id: i64,
    pub issue_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub student_name: Option<String>,
    pub book_title: Option<String>,
}

/// Issue-book form
#[derive(Debug, Clone, Deserialize)]
pub struct IssueBookForm {
    pub student_id: i64,
    pub book_id: i64,
}

/// Dashboard counters
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DashboardStats {
    pub total_books: i64,
    pub issued_books: i64,
    pub students: i64,
}
