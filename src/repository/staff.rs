//! Staff repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::staff::{CreateStaff, Staff},
};

#[derive(Clone)]
pub struct StaffRepository {
    pool: Pool<Postgres>,
}

impl StaffRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get a staff member by staff ID (natural key)
    pub async fn get_by_staff_id(&self, staff_id: &str) -> AppResult<Staff> {
        sqlx::query_as::<_, Staff>("SELECT * FROM staff WHERE staff_id = $1")
            .bind(staff_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Staff {} not found", staff_id)))
    }

    /// Check if a staff member with this staff ID already exists
    pub async fn staff_id_exists(&self, staff_id: &str) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM staff WHERE staff_id = $1)")
                .bind(staff_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// Insert a new staff member
    pub async fn create(&self, staff: &CreateStaff) -> AppResult<Staff> {
        let created = sqlx::query_as::<_, Staff>(
            "INSERT INTO staff (staff_id, name) VALUES ($1, $2) RETURNING *",
        )
        .bind(&staff.staff_id)
        .bind(&staff.name)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }
}
