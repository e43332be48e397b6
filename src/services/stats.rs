//! Statistics service

use crate::{error::AppResult, models::loan::DashboardStats, repository::Repository};

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Counters shown on the dashboard
    pub async fn dashboard(&self) -> AppResult<DashboardStats> {
        Ok(DashboardStats {
            total_books: self.repository.books.count().await?,
            issued_books: self.repository.loans.count_open().await?,
            students: self.repository.students.count().await?,
        })
    }
}
