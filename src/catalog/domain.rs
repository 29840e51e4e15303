pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::{BookStatus, LibraryResult};

#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto>;
    async fn find_books_by_status(&self, status: BookStatus) -> LibraryResult<Vec<BookDto>>;
    async fn count_books(&self) -> LibraryResult<usize>;
}
