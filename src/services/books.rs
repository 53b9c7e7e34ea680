//! Book catalog service

use crate::{
    error::AppResult,
    models::{Book, CreateBook, DeleteOutcome, NewBook, UpdateBook, UpdateOutcome},
    repository::{parse_id, Repository},
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Store a validated book
    pub async fn create_book(&self, book: CreateBook) -> AppResult<()> {
        let book = NewBook::try_from(book)?;
        let id = self.repository.books.insert(&book).await?;
        tracing::info!(book_id = %id, "Book created");
        Ok(())
    }

    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books.find_all().await
    }

    pub async fn find_books(&self, name: &str) -> AppResult<Vec<Book>> {
        self.repository.books.find_by_name(name).await
    }

    pub async fn update_book(&self, id: &str, book: UpdateBook) -> AppResult<UpdateOutcome> {
        let id = parse_id(id)?;
        let outcome = self.repository.books.update_by_id(id, &book).await?;
        if outcome.matched_count == 0 {
            tracing::debug!(book_id = %id, "Update matched no book");
        }
        Ok(outcome)
    }

    pub async fn delete_book(&self, id: &str) -> AppResult<DeleteOutcome> {
        let id = parse_id(id)?;
        let outcome = self.repository.books.delete_by_id(id).await?;
        tracing::info!(book_id = %id, deleted = outcome.deleted_count, "Book delete processed");
        Ok(outcome)
    }
}
