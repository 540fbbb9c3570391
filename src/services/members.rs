//! Member management service: readers and staff

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};

use crate::{
    error::{AppError, AppResult},
    models::{
        reader::CreateReader,
        staff::CreateStaff,
        Reader, Staff,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct MembersService {
    repository: Repository,
}

impl MembersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a new staff member, enforcing staff ID uniqueness
    pub async fn create_staff(&self, staff: CreateStaff) -> AppResult<Staff> {
        if self.repository.staff.staff_id_exists(&staff.staff_id).await? {
            return Err(AppError::Conflict(format!(
                "Staff with ID {} already exists",
                staff.staff_id
            )));
        }
        self.repository.staff.create(&staff).await
    }

    /// Fetch a staff member by staff ID
    pub async fn get_staff(&self, staff_id: &str) -> AppResult<Staff> {
        self.repository.staff.get_by_staff_id(staff_id).await
    }

    /// Create a new reader, enforcing email and phone uniqueness. The
    /// password is hashed before storage and the listed book IDs are
    /// resolved to foreign keys.
    pub async fn create_reader(&self, reader: CreateReader) -> AppResult<Reader> {
        if self.repository.readers.email_exists(&reader.email).await? {
            return Err(AppError::Conflict(format!(
                "Reader with email {} already exists",
                reader.email
            )));
        }
        if self.repository.readers.phone_exists(&reader.phone).await? {
            return Err(AppError::Conflict(format!(
                "Reader with phone {} already exists",
                reader.phone
            )));
        }

        let mut book_ids = Vec::with_capacity(reader.books.len());
        for book_id in &reader.books {
            let book = self.repository.books.get_by_book_id(book_id).await?;
            book_ids.push(book.id);
        }

        let password_hash = self.hash_password(&reader.password)?;
        self.repository
            .readers
            .create(&reader, &password_hash, &book_ids)
            .await
    }

    /// Fetch a reader by email
    pub async fn get_reader(&self, email: &str) -> AppResult<Reader> {
        self.repository.readers.get_by_email(email).await
    }

    fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
        Ok(hash.to_string())
    }
}
