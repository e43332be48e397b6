//! Students repository for database operations

use sqlx::{Pool, Sqlite};

use crate::{error::AppResult, models::student::Student};

#[derive(Clone)]
pub struct StudentsRepository {
    pool: Pool<Sqlite>,
}

impl StudentsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// All students, newest first
    pub async fn list_all(&self) -> AppResult<Vec<Student>> {
        let students = sqlx::query_as::<_, Student>(
            "SELECT * FROM students ORDER BY student_id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(students)
    }

    /// Insert a new student, returning its id
    pub async fn insert(
        &self,
        name: &str,
        roll_no: Option<&str>,
        course: Option<&str>,
        contact: Option<&str>,
    ) -> AppResult<i64> {
        let result = sqlx::query(
            "INSERT INTO students (name, roll_no, course, contact) VALUES (?, ?, ?, ?)",
        )
        .bind(name)
        .bind(roll_no)
        .bind(course)
        .bind(contact)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Count all students
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM students")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
