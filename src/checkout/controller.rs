use crate::books::domain::Book;
use crate::checkout::command::borrow_book_cmd::{BorrowBookCommand, BorrowBookCommandRequest};
use crate::checkout::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::core::command::Command;
use crate::core::controller::{AppState, ConsoleError};

pub(crate) async fn borrow_book(state: &AppState, isbn: &str) -> Result<String, ConsoleError> {
    let req = BorrowBookCommandRequest::new(isbn.to_string());
    let res = BorrowBookCommand::new(state.checkout_service.clone()).execute(req).await?;
    Ok(format!("You have borrowed '{}' by {}.", res.book.title(), res.book.author()))
}

pub(crate) async fn return_book(state: &AppState, isbn: &str) -> Result<String, ConsoleError> {
    let req = ReturnBookCommandRequest::new(isbn.to_string());
    let res = ReturnBookCommand::new(state.checkout_service.clone()).execute(req).await?;
    Ok(format!("You have returned '{}'. Thank you!", res.book.title()))
}
