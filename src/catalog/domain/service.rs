use std::sync::Arc;
use async_trait::async_trait;
use tracing::{debug, info};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::library::{BookStatus, LibraryResult};
use crate::core::repository::Repository;

pub(crate) struct CatalogServiceImpl {
    book_repository: Arc<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(book_repository: Arc<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        let mut entity = BookEntity::from(book);
        // new records always start on the shelf
        entity.release();
        // the insert is the last fallible step, so Ok means the book is on the shelf
        if let Err(err) = self.book_repository.create(&entity).await {
            debug!(isbn = book.isbn.as_str(), "rejected new book: {}", err);
            return Err(err);
        }
        info!(isbn = entity.isbn.as_str(), title = entity.title.as_str(), "added book");
        Ok(BookDto::from(&entity))
    }

    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto> {
        self.book_repository.get(isbn).await.map(|b| BookDto::from(&b))
    }

    async fn find_books_by_status(&self, status: BookStatus) -> LibraryResult<Vec<BookDto>> {
        let res = self.book_repository.find_by_status(status).await?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn count_books(&self) -> LibraryResult<usize> {
        self.book_repository.count().await
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            version: other.version,
            title: other.title.to_string(),
            author: other.author.to_string(),
            book_status: other.book_status,
            borrowed_at: other.borrowed_at,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            version: other.version,
            title: other.title.to_string(),
            author: other.author.to_string(),
            book_status: other.book_status,
            borrowed_at: other.borrowed_at,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}
