//! PostgreSQL implementation of StudentRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use chute_core::entities::{AttendanceEntry, Student};
use chute_core::traits::{RepoResult, StudentRepository};
use chute_core::value_objects::Category;

use crate::mappers::{attendance_from_row, student_from_row};
use crate::models::{AttendanceModel, StudentModel};

use super::error::{guardian_not_found, map_db_error, map_fk_violation, student_not_found};

const STUDENT_COLUMNS: &str =
    "id, name, date_of_birth, age, category, jersey_number, active, guardian_id, created_at";

/// PostgreSQL implementation of StudentRepository
#[derive(Clone)]
pub struct PgStudentRepository {
    pool: PgPool,
}

impl PgStudentRepository {
    /// Create a new PgStudentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for PgStudentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Student>> {
        let result = sqlx::query_as::<_, StudentModel>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(student_from_row).transpose()
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<Student>> {
        let rows = sqlx::query_as::<_, StudentModel>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students ORDER BY name"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(student_from_row).collect()
    }

    #[instrument(skip(self))]
    async fn list_by_category(&self, category: Category) -> RepoResult<Vec<Student>> {
        let rows = sqlx::query_as::<_, StudentModel>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE category = $1 ORDER BY name"
        ))
        .bind(category.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(student_from_row).collect()
    }

    #[instrument(skip(self))]
    async fn list_active_by_guardian(&self, guardian_id: Uuid) -> RepoResult<Vec<Student>> {
        let rows = sqlx::query_as::<_, StudentModel>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE guardian_id = $1 AND active ORDER BY name"
        ))
        .bind(guardian_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(student_from_row).collect()
    }

    #[instrument(skip(self))]
    async fn create(&self, student: &Student) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO students (id, name, date_of_birth, age, category, jersey_number,
                                  active, guardian_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(student.id)
        .bind(&student.name)
        .bind(student.date_of_birth)
        .bind(student.age)
        .bind(student.category.as_str())
        .bind(&student.jersey_number)
        .bind(student.active)
        .bind(student.guardian_id)
        .bind(student.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_fk_violation(e, || guardian_not_found(student.guardian_id)))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, student: &Student) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE students
            SET name = $2, date_of_birth = $3, age = $4, category = $5,
                jersey_number = $6, active = $7
            WHERE id = $1
            ",
        )
        .bind(student.id)
        .bind(&student.name)
        .bind(student.date_of_birth)
        .bind(student.age)
        .bind(student.category.as_str())
        .bind(&student.jersey_number)
        .bind(student.active)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(student_not_found(student.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(student_not_found(id));
        }

        Ok(())
    }

    // Single-statement upsert: at most one row per (student, date), and a
    // concurrent writer for a different date can never be overwritten.
    #[instrument(skip(self))]
    async fn set_attendance(
        &self,
        student_id: Uuid,
        date: NaiveDate,
        present: bool,
    ) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO attendance (student_id, date, present)
            VALUES ($1, $2, $3)
            ON CONFLICT (student_id, date) DO UPDATE SET present = EXCLUDED.present
            ",
        )
        .bind(student_id)
        .bind(date)
        .bind(present)
        .execute(&self.pool)
        .await
        .map_err(|e| map_fk_violation(e, || student_not_found(student_id)))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn attendance_for(&self, student_id: Uuid) -> RepoResult<Vec<AttendanceEntry>> {
        let rows = sqlx::query_as::<_, AttendanceModel>(
            r"
            SELECT date, present
            FROM attendance
            WHERE student_id = $1
            ORDER BY date DESC
            ",
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(attendance_from_row).collect())
    }
}
