//! Books repository for database operations

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use super::{decode_all, encode, DocumentStore};
use crate::{
    error::AppResult,
    models::{Book, DeleteOutcome, NewBook, UpdateBook, UpdateOutcome},
};

const COLLECTION: &str = "books";

#[derive(Clone)]
pub struct BooksRepository {
    store: Arc<dyn DocumentStore>,
}

impl BooksRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Insert a new book, returning the assigned identifier
    pub async fn insert(&self, book: &NewBook) -> AppResult<ObjectId> {
        self.store.insert(COLLECTION, encode(book)?).await
    }

    /// Books whose name matches exactly
    pub async fn find_by_name(&self, name: &str) -> AppResult<Vec<Book>> {
        let docs = self.store.find_by_field(COLLECTION, "name", name).await?;
        decode_all(docs)
    }

    pub async fn find_all(&self) -> AppResult<Vec<Book>> {
        let docs = self.store.find_all(COLLECTION).await?;
        decode_all(docs)
    }

    pub async fn update_by_id(&self, id: ObjectId, book: &UpdateBook) -> AppResult<UpdateOutcome> {
        self.store.update_by_id(COLLECTION, id, encode(book)?).await
    }

    pub async fn delete_by_id(&self, id: ObjectId) -> AppResult<DeleteOutcome> {
        self.store.delete_by_id(COLLECTION, id).await
    }
}
