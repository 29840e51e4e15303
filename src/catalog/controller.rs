use comfy_table::presets::ASCII_FULL;
use comfy_table::{CellAlignment, Table, TableComponent};
use crate::books::domain::Book;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::core::command::Command;
use crate::core::controller::{AppState, ConsoleError};
use crate::core::library::BookStatus;

pub(crate) async fn add_book(state: &AppState, title: &str, author: &str,
                             isbn: &str) -> Result<String, ConsoleError> {
    let req = AddBookCommandRequest::new(isbn, title, author);
    let res = AddBookCommand::new(state.catalog_service.clone()).execute(req).await?;
    Ok(format!("Book '{}' by {} has been added to the library.", res.book.title(), res.book.author()))
}

pub(crate) async fn view_available_books(state: &AppState) -> Result<String, ConsoleError> {
    let req = ListBooksCommandRequest::new(BookStatus::Available);
    let res = ListBooksCommand::new(state.catalog_service.clone()).execute(req).await?;
    if res.books.is_empty() {
        return Ok("No books available in the library at the moment.".to_string());
    }
    let mut table = shelf_table(vec!["Title", "Author", "ISBN", "Status"]);
    for book in &res.books {
        table.add_row(vec![book.title(), book.author(), book.isbn.as_str(), book.status().to_string().as_str()]);
    }
    Ok(format!("We have the following books available in our library:\n{}", table))
}

pub(crate) async fn view_borrowed_books(state: &AppState) -> Result<String, ConsoleError> {
    let req = ListBooksCommandRequest::new(BookStatus::Borrowed);
    let res = ListBooksCommand::new(state.catalog_service.clone()).execute(req).await?;
    if res.books.is_empty() {
        return Ok("No books are currently borrowed.".to_string());
    }
    let mut table = shelf_table(vec!["Title", "Author", "ISBN", "Status", "Borrow Date"]);
    for book in &res.books {
        table.add_row(vec![book.title(), book.author(), book.isbn.as_str(), book.status().to_string().as_str(),
                           book.borrowed_at_display().as_str()]);
    }
    Ok(format!("The following books are currently borrowed:\n{}", table))
}

// ascii grid with a single rule under the header and none between rows
fn shelf_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL)
        .set_style(TableComponent::HeaderLines, '-')
        .remove_style(TableComponent::HorizontalLines)
        .remove_style(TableComponent::MiddleIntersections)
        .remove_style(TableComponent::LeftBorderIntersections)
        .remove_style(TableComponent::RightBorderIntersections)
        .set_header(header);
    for column in table.column_iter_mut() {
        column.set_cell_alignment(CellAlignment::Center);
    }
    table
}
