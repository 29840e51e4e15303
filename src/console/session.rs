use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error};
use crate::catalog::controller::{add_book, view_available_books, view_borrowed_books};
use crate::checkout::controller::{borrow_book, return_book};
use crate::console::menu::MenuChoice;
use crate::core::controller::{AppState, ConsoleError, Outcome};
use crate::core::library::LibraryResult;

/// Console drives one interactive session against the catalog.
///
/// Catalog rejections and failures are printed and the session carries on; only
/// I/O errors on the console streams end `run` with an error. End of input at any
/// prompt ends the session cleanly.
pub struct Console<R, W> {
    state: AppState,
    reader: R,
    writer: W,
}

impl<R, W> Console<R, W>
    where R: AsyncBufRead + Unpin + Send,
          W: AsyncWrite + Unpin + Send {
    pub fn new(state: AppState, reader: R, writer: W) -> Self {
        Self {
            state,
            reader,
            writer,
        }
    }

    pub async fn run(&mut self) -> LibraryResult<()> {
        loop {
            self.show_menu().await?;
            let choice = match self.prompt("Enter your choice: ").await? {
                Some(line) => MenuChoice::from(line.as_str()),
                None => return self.input_closed(),
            };
            if choice == MenuChoice::Quit {
                self.say("Exiting the program.").await?;
                return Ok(());
            }
            let reply = match self.dispatch(choice).await? {
                Some(reply) => reply,
                None => return self.input_closed(),
            };
            self.say(reply.as_str()).await?;
            if !self.confirm_continue().await? {
                return Ok(());
            }
        }
    }

    async fn dispatch(&mut self, choice: MenuChoice) -> LibraryResult<Option<String>> {
        let res = match choice {
            MenuChoice::AddBook => {
                let Some(title) = self.prompt("Enter book title: ").await? else { return Ok(None) };
                let Some(author) = self.prompt("Enter book author: ").await? else { return Ok(None) };
                let Some(isbn) = self.prompt("Enter book ISBN: ").await? else { return Ok(None) };
                add_book(&self.state, title.as_str(), author.as_str(), isbn.as_str()).await
            }
            MenuChoice::BorrowBook => {
                let Some(isbn) = self.prompt("Enter book ISBN to borrow: ").await? else { return Ok(None) };
                borrow_book(&self.state, isbn.as_str()).await
            }
            MenuChoice::ReturnBook => {
                let Some(isbn) = self.prompt("Enter book ISBN to return: ").await? else { return Ok(None) };
                return_book(&self.state, isbn.as_str()).await
            }
            MenuChoice::ViewAvailable => view_available_books(&self.state).await,
            MenuChoice::ViewBorrowed => view_borrowed_books(&self.state).await,
            MenuChoice::Quit | MenuChoice::Invalid => Ok(MenuChoice::Invalid.to_string()),
        };
        Ok(Some(reply_text(choice, res)))
    }

    async fn show_menu(&mut self) -> LibraryResult<()> {
        let mut menu = format!("\nWelcome to {}. Enter your choice to continue:\n",
                               self.state.config.library_name);
        for option in MenuChoice::OPTIONS {
            menu.push_str(format!("{}\n", option).as_str());
        }
        self.writer.write_all(menu.as_bytes()).await?;
        Ok(())
    }

    // 'c' shows the menu again, 'q' ends the session, anything else is read past
    async fn confirm_continue(&mut self) -> LibraryResult<bool> {
        self.say("Press 'q' to exit or 'c' to continue").await?;
        loop {
            match self.prompt("").await?.as_deref() {
                Some("c") => return Ok(true),
                Some("q") => {
                    self.say("Thank you! Feel free to come again.").await?;
                    return Ok(false);
                }
                Some(_) => continue,
                None => return self.input_closed().map(|_| false),
            }
        }
    }

    async fn prompt(&mut self, text: &str) -> LibraryResult<Option<String>> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.flush().await?;
        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        let trimmed = line.strip_suffix('\n').unwrap_or(line.as_str());
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(Some(trimmed.to_string()))
    }

    async fn say(&mut self, text: &str) -> LibraryResult<()> {
        self.writer.write_all(text.as_bytes()).await?;
        if !text.ends_with('\n') {
            self.writer.write_all(b"\n").await?;
        }
        self.writer.flush().await?;
        Ok(())
    }

    fn input_closed(&self) -> LibraryResult<()> {
        debug!("console input closed, ending session");
        Ok(())
    }
}

fn reply_text(choice: MenuChoice, res: Result<String, ConsoleError>) -> String {
    match res {
        Ok(reply) => reply,
        Err((Outcome::Rejected, message)) => message,
        Err((Outcome::Failed, message)) => {
            error!(choice = choice.key(), "catalog request failed: {}", message);
            message
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::domain::CatalogService;
    use crate::console::session::Console;
    use crate::core::controller::AppState;
    use crate::core::domain::Configuration;
    use crate::core::library::BookStatus;

    fn has_row(out: &str, expected: &[&str]) -> bool {
        out.lines().filter(|l| l.starts_with('|')).any(|l| {
            let cells: Vec<&str> = l.trim_matches('|').split('|').map(|c| c.trim()).collect();
            cells.starts_with(expected)
        })
    }

    async fn run_session(state: &AppState, input: &str) -> String {
        let mut out: Vec<u8> = Vec::new();
        Console::new(state.clone(), input.as_bytes(), &mut out).run().await.expect("session should run");
        String::from_utf8(out).expect("utf8 output")
    }

    #[tokio::test]
    async fn test_should_show_menu_and_quit() {
        let state = AppState::new(&Configuration::new("Test Library"));
        let out = run_session(&state, "q\n").await;
        assert!(out.starts_with("\nWelcome to Test Library. Enter your choice to continue:\nPress 1 to add a new book\n"));
        assert!(out.contains("Press 'q' to exit\nEnter your choice: Exiting the program.\n"));
    }

    #[tokio::test]
    async fn test_should_run_add_borrow_return_scenario() {
        let state = AppState::new(&Configuration::new("test"));
        let input = "1\nDune\nHerbert\n111\nc\n\
                     2\n111\nc\n\
                     5\nc\n\
                     4\nc\n\
                     3\n111\nc\n\
                     4\nc\n\
                     5\nq\n";
        let out = run_session(&state, input).await;

        assert!(out.contains("Book 'Dune' by Herbert has been added to the library.\n"));
        assert!(out.contains("You have borrowed 'Dune' by Herbert.\n"));
        assert!(out.contains("The following books are currently borrowed:\n"));
        assert!(has_row(out.as_str(), &["Dune", "Herbert", "111", "Borrowed"]));
        assert!(out.contains("No books available in the library at the moment.\n"));
        assert!(out.contains("You have returned 'Dune'. Thank you!\n"));
        assert!(has_row(out.as_str(), &["Dune", "Herbert", "111", "Available"]));
        assert!(out.contains("No books are currently borrowed.\n"));
        assert!(out.ends_with("Thank you! Feel free to come again.\n"));

        let book = state.catalog_service.find_book_by_isbn("111").await.expect("should find book");
        assert_eq!(BookStatus::Available, book.book_status);
        assert_eq!(None, book.borrowed_at);
    }

    #[tokio::test]
    async fn test_should_report_rejections_and_keep_going() {
        let state = AppState::new(&Configuration::new("test"));
        let input = "1\nDune\nHerbert\n111\nc\n\
                     1\nEmma\nAusten\n111\nc\n\
                     2\n999\nc\n\
                     3\n111\nc\n\
                     2\n111\nc\n\
                     2\n111\nq\n";
        let out = run_session(&state, input).await;

        assert!(out.contains("A book with ISBN 111 already exists.\n"));
        assert!(out.contains("No book found with ISBN 999.\n"));
        assert!(out.contains("'Dune' is already available in the library.\n"));
        assert!(out.contains("The book 'Dune' is already borrowed.\n"));
        assert_eq!(1, state.catalog_service.count_books().await.expect("should count"));
    }

    #[tokio::test]
    async fn test_should_reject_unknown_option() {
        let state = AppState::new(&Configuration::new("test"));
        let out = run_session(&state, "7\nc\nq\n").await;
        assert!(out.contains("Enter your choice: Not a valid option.\nPress 'q' to exit or 'c' to continue\n"));
        assert!(out.ends_with("Exiting the program.\n"));
    }

    #[tokio::test]
    async fn test_should_ignore_other_input_until_continue_or_quit() {
        let state = AppState::new(&Configuration::new("test"));
        let out = run_session(&state, "4\nyes\n\nc\nq\n").await;
        assert_eq!(2, out.matches("Welcome to test.").count());
        assert!(out.ends_with("Exiting the program.\n"));
    }

    #[tokio::test]
    async fn test_should_end_session_on_closed_input() {
        let state = AppState::new(&Configuration::new("test"));
        let out = run_session(&state, "1\nDune\n").await;
        assert!(out.ends_with("Enter book author: "));
        assert_eq!(0, state.catalog_service.count_books().await.expect("should count"));

        let out = run_session(&state, "").await;
        assert!(out.ends_with("Enter your choice: "));
    }

    #[tokio::test]
    async fn test_should_accept_crlf_input() {
        let state = AppState::new(&Configuration::new("test"));
        let _ = run_session(&state, "1\r\nDune\r\nHerbert\r\n111\r\nq\r\n").await;
        let book = state.catalog_service.find_book_by_isbn("111").await.expect("should find book");
        assert_eq!("Herbert", book.author.as_str());
    }
}
