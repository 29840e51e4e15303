use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};
use crate::core::repository::Repository;

// Shelf keeps books in insertion order with an isbn -> position index. Books are
// never removed so positions stay valid.
#[derive(Debug, Default)]
struct Shelf {
    books: Vec<BookEntity>,
    index: HashMap<String, usize>,
}

#[derive(Debug, Default)]
pub(crate) struct MemoryBookRepository {
    shelf: RwLock<Shelf>,
}

impl MemoryBookRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> LibraryResult<RwLockReadGuard<'_, Shelf>> {
        self.shelf.read().map_err(|err| LibraryError::runtime(
            format!("book shelf lock poisoned {:?}", err).as_str(), None))
    }

    fn write(&self) -> LibraryResult<RwLockWriteGuard<'_, Shelf>> {
        self.shelf.write().map_err(|err| LibraryError::runtime(
            format!("book shelf lock poisoned {:?}", err).as_str(), None))
    }
}

fn matches(book: &BookEntity, predicate: &HashMap<String, String>) -> LibraryResult<bool> {
    for (key, value) in predicate {
        let found = match key.as_str() {
            "isbn" => book.isbn == *value,
            "book_status" => book.book_status.to_string() == *value,
            _ => {
                return Err(LibraryError::runtime(
                    format!("unsupported book predicate {}", key).as_str(), Some("400".to_string())));
            }
        };
        if !found {
            return Ok(false);
        }
    }
    Ok(true)
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut shelf = self.write()?;
        if shelf.index.contains_key(entity.isbn.as_str()) {
            return Err(LibraryError::duplicate_key(
                format!("A book with ISBN {} already exists.", entity.isbn).as_str()));
        }
        let position = shelf.books.len();
        shelf.index.insert(entity.isbn.to_string(), position);
        shelf.books.push(entity.clone());
        Ok(1)
    }

    async fn update(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut shelf = self.write()?;
        let position = *shelf.index.get(entity.isbn.as_str()).ok_or_else(|| LibraryError::not_found(
            format!("No book found with ISBN {}.", entity.isbn).as_str()))?;
        let existing = &mut shelf.books[position];
        if existing.version != entity.version {
            return Err(LibraryError::runtime(
                format!("stale version {} for book {}, stored version is {}",
                        entity.version, entity.isbn, existing.version).as_str(), Some("409".to_string())));
        }
        *existing = entity.clone();
        existing.version = entity.version + 1;
        Ok(1)
    }

    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        let shelf = self.read()?;
        shelf.index.get(id)
            .map(|position| shelf.books[*position].clone())
            .ok_or_else(|| LibraryError::not_found(format!("No book found with ISBN {}.", id).as_str()))
    }

    async fn query(&self, predicate: &HashMap<String, String>) -> LibraryResult<Vec<BookEntity>> {
        let shelf = self.read()?;
        let mut res = vec![];
        for book in shelf.books.iter() {
            if matches(book, predicate)? {
                res.push(book.clone());
            }
        }
        Ok(res)
    }

    async fn count(&self) -> LibraryResult<usize> {
        Ok(self.read()?.books.len())
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn find_by_status(&self, status: BookStatus) -> LibraryResult<Vec<BookEntity>> {
        self.query(&HashMap::from([("book_status".to_string(), status.to_string())])).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::books::domain::model::BookEntity;
    use crate::books::repository::BookRepository;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::core::library::{BookStatus, LibraryError};
    use crate::core::repository::Repository;
    use crate::utils::date::now_local;

    #[tokio::test]
    async fn test_should_create_get_books() {
        let repo = MemoryBookRepository::new();
        let book = BookEntity::new("111", "Dune", "Herbert");
        let size = repo.create(&book).await.expect("should create book");
        assert_eq!(1, size);
        let loaded = repo.get("111").await.expect("should return book");
        assert_eq!(book, loaded);
        assert_eq!(1, repo.count().await.expect("should count"));
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_isbn() {
        let repo = MemoryBookRepository::new();
        let _ = repo.create(&BookEntity::new("111", "Dune", "Herbert")).await.expect("should create book");
        let res = repo.create(&BookEntity::new("111", "Emma", "Austen")).await;
        assert!(matches!(res, Err(LibraryError::DuplicateKey { .. })));
        assert_eq!(1, repo.count().await.expect("should count"));
        assert_eq!("Dune", repo.get("111").await.expect("should return book").title.as_str());
    }

    #[tokio::test]
    async fn test_should_not_get_missing_book() {
        let repo = MemoryBookRepository::new();
        let res = repo.get("missing").await;
        assert!(matches!(res, Err(LibraryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_update_books() {
        let repo = MemoryBookRepository::new();
        let mut book = BookEntity::new("111", "Dune", "Herbert");
        let _ = repo.create(&book).await.expect("should create book");
        book.borrow(now_local());
        let _ = repo.update(&book).await.expect("should update book");
        let loaded = repo.get("111").await.expect("should return book");
        assert_eq!(1, loaded.version);
        assert_eq!(BookStatus::Borrowed, loaded.book_status);
        assert!(loaded.borrowed_at.is_some());
    }

    #[tokio::test]
    async fn test_should_reject_stale_update() {
        let repo = MemoryBookRepository::new();
        let mut book = BookEntity::new("111", "Dune", "Herbert");
        let _ = repo.create(&book).await.expect("should create book");
        let _ = repo.update(&book).await.expect("should update book");
        book.title = "Dune Messiah".to_string();
        let res = repo.update(&book).await;
        assert!(matches!(res, Err(LibraryError::Runtime { .. })));
        assert_eq!("Dune", repo.get("111").await.expect("should return book").title.as_str());
    }

    #[tokio::test]
    async fn test_should_not_update_missing_book() {
        let repo = MemoryBookRepository::new();
        let res = repo.update(&BookEntity::new("111", "Dune", "Herbert")).await;
        assert!(matches!(res, Err(LibraryError::NotFound { .. })));
        assert_eq!(0, repo.count().await.expect("should count"));
    }

    #[tokio::test]
    async fn test_should_find_by_status_in_insertion_order() {
        let repo = MemoryBookRepository::new();
        for (isbn, title) in [("3", "C"), ("1", "A"), ("2", "B")] {
            let _ = repo.create(&BookEntity::new(isbn, title, "anon")).await.expect("should create book");
        }
        let mut borrowed = repo.get("1").await.expect("should return book");
        borrowed.borrow(now_local());
        let _ = repo.update(&borrowed).await.expect("should update book");

        let available: Vec<String> = repo.find_by_status(BookStatus::Available).await
            .expect("should query").into_iter().map(|b| b.isbn).collect();
        assert_eq!(vec!["3".to_string(), "2".to_string()], available);
        let borrowed = repo.find_by_status(BookStatus::Borrowed).await.expect("should query");
        assert_eq!(1, borrowed.len());
        assert_eq!("1", borrowed[0].isbn.as_str());
    }

    #[tokio::test]
    async fn test_should_query_by_isbn() {
        let repo = MemoryBookRepository::new();
        let _ = repo.create(&BookEntity::new("1", "Emma", "Austen")).await.expect("should create book");
        let _ = repo.create(&BookEntity::new("2", "Dune", "Herbert")).await.expect("should create book");
        let res = repo.query(&HashMap::from([("isbn".to_string(), "2".to_string())])).await.expect("should query");
        assert_eq!(1, res.len());
        assert_eq!("Dune", res[0].title.as_str());
        let res = repo.query(&HashMap::from([("author".to_string(), "Austen".to_string())])).await;
        assert!(res.is_err());
    }
}
