use std::sync::Arc;
use async_trait::async_trait;
use tracing::{debug, info};
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::checkout::domain::CheckoutService;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::utils::date::now_local;

pub(crate) struct CheckoutServiceImpl {
    book_repository: Arc<dyn BookRepository>,
}

impl CheckoutServiceImpl {
    pub(crate) fn new(book_repository: Arc<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

// The update is the last fallible step of each transition, so Ok means the change is stored.
#[async_trait]
impl CheckoutService for CheckoutServiceImpl {
    async fn borrow(&self, isbn: &str) -> LibraryResult<BookDto> {
        let mut book = self.book_repository.get(isbn).await?;
        if book.book_status != BookStatus::Available {
            debug!(isbn, "rejected borrow of a borrowed book");
            return Err(LibraryError::invalid_state(format!("The book '{}' is already borrowed.",
                                                           book.title).as_str(), Some("409".to_string())));
        }
        book.borrow(now_local());
        self.book_repository.update(&book).await?;
        book.version += 1;
        info!(isbn, title = book.title.as_str(), "borrowed book");
        Ok(BookDto::from(&book))
    }

    async fn returned(&self, isbn: &str) -> LibraryResult<BookDto> {
        let mut book = self.book_repository.get(isbn).await?;
        if book.book_status != BookStatus::Borrowed {
            debug!(isbn, "rejected return of an available book");
            return Err(LibraryError::invalid_state(format!("'{}' is already available in the library.",
                                                           book.title).as_str(), Some("409".to_string())));
        }
        book.release();
        self.book_repository.update(&book).await?;
        book.version += 1;
        info!(isbn, title = book.title.as_str(), "returned book");
        Ok(BookDto::from(&book))
    }
}
