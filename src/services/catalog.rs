//! Catalog management service: authors, publishers and books

use crate::{
    error::{AppError, AppResult},
    models::{
        author::CreateAuthor,
        book::CreateBook,
        publisher::CreatePublisher,
        Author, Book, Publisher,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a new author, enforcing email uniqueness
    pub async fn create_author(&self, author: CreateAuthor) -> AppResult<Author> {
        if self.repository.authors.email_exists(&author.email).await? {
            return Err(AppError::Conflict(format!(
                "Author with email {} already exists",
                author.email
            )));
        }
        self.repository.authors.create(&author).await
    }

    /// Fetch an author by email
    pub async fn get_author(&self, email: &str) -> AppResult<Author> {
        self.repository.authors.get_by_email(email).await
    }

    /// Create a new publisher, enforcing name uniqueness
    pub async fn create_publisher(&self, publisher: CreatePublisher) -> AppResult<Publisher> {
        if self.repository.publishers.name_exists(&publisher.name).await? {
            return Err(AppError::Conflict(format!(
                "Publisher with name {} already exists",
                publisher.name
            )));
        }
        self.repository.publishers.create(&publisher).await
    }

    /// Fetch a publisher by name
    pub async fn get_publisher(&self, name: &str) -> AppResult<Publisher> {
        self.repository.publishers.get_by_name(name).await
    }

    /// Create a new book, enforcing title uniqueness and resolving the
    /// author and publisher application IDs to foreign keys
    pub async fn create_book(&self, book: CreateBook) -> AppResult<Book> {
        if self.repository.books.title_exists(&book.title).await? {
            return Err(AppError::Conflict(format!(
                "Book with title {} already exists",
                book.title
            )));
        }

        let author = self.repository.authors.get_by_author_id(&book.author).await?;
        let publisher = self
            .repository
            .publishers
            .get_by_publisher_id(&book.publisher)
            .await?;

        self.repository.books.create(&book, author.id, publisher.id).await
    }

    /// Fetch a book by title. Books flagged unavailable are withheld even
    /// though the record exists.
    pub async fn get_book(&self, title: &str) -> AppResult<Book> {
        let book = self.repository.books.get_by_title(title).await?;
        if !book.available {
            return Err(AppError::Unavailable(format!(
                "Book {} is not available",
                title
            )));
        }
        Ok(book)
    }
}
