use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum MenuChoice {
    AddBook,
    BorrowBook,
    ReturnBook,
    ViewAvailable,
    ViewBorrowed,
    Quit,
    Invalid,
}

impl MenuChoice {
    // in the order the menu lists them
    pub const OPTIONS: [MenuChoice; 6] = [
        MenuChoice::AddBook,
        MenuChoice::BorrowBook,
        MenuChoice::ReturnBook,
        MenuChoice::ViewAvailable,
        MenuChoice::ViewBorrowed,
        MenuChoice::Quit,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            MenuChoice::AddBook => "1",
            MenuChoice::BorrowBook => "2",
            MenuChoice::ReturnBook => "3",
            MenuChoice::ViewAvailable => "4",
            MenuChoice::ViewBorrowed => "5",
            MenuChoice::Quit => "q",
            MenuChoice::Invalid => "",
        }
    }
}

impl From<&str> for MenuChoice {
    fn from(s: &str) -> Self {
        MenuChoice::OPTIONS.iter()
            .find(|choice| choice.key() == s)
            .copied()
            .unwrap_or(MenuChoice::Invalid)
    }
}

impl Display for MenuChoice {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            MenuChoice::AddBook => write!(f, "Press 1 to add a new book"),
            MenuChoice::BorrowBook => write!(f, "Press 2 to borrow a book"),
            MenuChoice::ReturnBook => write!(f, "Press 3 to return a book"),
            MenuChoice::ViewAvailable => write!(f, "Press 4 to view currently available books in our library"),
            MenuChoice::ViewBorrowed => write!(f, "Press 5 to view currently borrowed books from our library"),
            MenuChoice::Quit => write!(f, "Press 'q' to exit"),
            MenuChoice::Invalid => write!(f, "Not a valid option."),
        }
    }
}
