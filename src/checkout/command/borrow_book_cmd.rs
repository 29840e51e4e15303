use std::sync::Arc;
use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::checkout::domain::CheckoutService;
use crate::core::command::{Command, CommandError};

pub(crate) struct BorrowBookCommand {
    checkout_service: Arc<dyn CheckoutService>,
}

impl BorrowBookCommand {
    pub(crate) fn new(checkout_service: Arc<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct BorrowBookCommandRequest {
    isbn: String,
}

impl BorrowBookCommandRequest {
    pub fn new(isbn: String) -> Self {
        Self {
            isbn,
        }
    }
}


#[derive(Debug)]
pub(crate) struct BorrowBookCommandResponse {
    pub book: BookDto,
}

impl BorrowBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<BorrowBookCommandRequest, BorrowBookCommandResponse> for BorrowBookCommand {
    async fn execute(&self, req: BorrowBookCommandRequest) -> Result<BorrowBookCommandResponse, CommandError> {
        self.checkout_service.borrow(req.isbn.as_str())
            .await.map_err(CommandError::from).map(BorrowBookCommandResponse::new)
    }
}
