//! Loan ledger service
//!
//! A record is Open while its return date is NULL and Closed once it is
//! set. Both transitions touch the ledger and the book's availability
//! flag in one transaction (see the loans repository).

use chrono::Local;

use crate::{
    error::AppResult,
    models::loan::{IssueBookForm, LoanRecord, LoanRecordDetails},
    repository::Repository,
};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
}

impl LoansService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Open a loan for a student on an available book.
    pub async fn issue(&self, form: IssueBookForm) -> AppResult<i64> {
        let today = Local::now().date_naive();
        self.repository
            .loans
            .issue(form.student_id, form.book_id, today)
            .await
    }

    /// Close an open loan, releasing the book. Closing an already-closed
    /// record is rejected as a conflict.
    pub async fn return_loan(&self, issue_id: i64) -> AppResult<LoanRecord> {
        let today = Local::now().date_naive();
        self.repository.loans.close(issue_id, today).await
    }

    /// All ledger rows with display names, newest first.
    pub async fn list_records(&self) -> AppResult<Vec<LoanRecordDetails>> {
        self.repository.loans.list_details().await
    }
}
