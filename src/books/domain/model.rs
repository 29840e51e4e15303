use chrono::{NaiveDateTime, Utc};
use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;

// BookEntity abstracts a catalog record; the isbn is the catalog key so there is
// exactly one record per isbn.
#[derive(Debug, PartialEq, Clone)]
pub(crate) struct BookEntity {
    pub isbn: String,
    pub version: i64,
    pub title: String,
    pub author: String,
    pub book_status: BookStatus,
    pub borrowed_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl BookEntity {
    pub fn new(isbn: &str, title: &str, author: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            version: 0,
            title: title.to_string(),
            author: author.to_string(),
            book_status: BookStatus::Available,
            borrowed_at: None,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    // status and borrowed_at only ever change together
    pub fn borrow(&mut self, at: NaiveDateTime) {
        self.book_status = BookStatus::Borrowed;
        self.borrowed_at = Some(at);
        self.updated_at = Utc::now().naive_utc();
    }

    pub fn release(&mut self) {
        self.book_status = BookStatus::Available;
        self.borrowed_at = None;
        self.updated_at = Utc::now().naive_utc();
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}
