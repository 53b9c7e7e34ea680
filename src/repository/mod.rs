//! Repository layer for database operations

pub mod books;
#[cfg(test)]
pub(crate) mod memory;
pub mod mongo;
pub mod users;

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::{self, oid::ObjectId, Document};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    error::{AppError, AppResult},
    models::{DeleteOutcome, UpdateOutcome},
};

pub use mongo::MongoStore;

/// Low-level access to a document database.
///
/// Implementations own connection handling; callers only see collections of
/// loosely-typed documents addressed by `ObjectId`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a document and return the identifier the store assigned to it
    async fn insert(&self, collection: &str, record: Document) -> AppResult<ObjectId>;

    /// All documents whose `field` is exactly `value`
    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> AppResult<Vec<Document>>;

    async fn find_all(&self, collection: &str) -> AppResult<Vec<Document>>;

    /// Merge `fields` into the document with this id. Missing ids are not an error.
    async fn update_by_id(
        &self,
        collection: &str,
        id: ObjectId,
        fields: Document,
    ) -> AppResult<UpdateOutcome>;

    /// Remove the document with this id. Missing ids are not an error.
    async fn delete_by_id(&self, collection: &str, id: ObjectId) -> AppResult<DeleteOutcome>;
}

/// Per-collection repositories over one shared document store
#[derive(Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
    pub users: users::UsersRepository,
}

impl Repository {
    /// Create a new repository on top of the given store
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            books: books::BooksRepository::new(store.clone()),
            users: users::UsersRepository::new(store),
        }
    }
}

/// Parse an identifier received from the network into the store's native type
pub fn parse_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| AppError::InvalidId(id.to_string()))
}

pub(crate) fn encode<T: Serialize>(value: &T) -> AppResult<Document> {
    Ok(bson::to_document(value)?)
}

pub(crate) fn decode_all<T: DeserializeOwned>(documents: Vec<Document>) -> AppResult<Vec<T>> {
    documents
        .into_iter()
        .map(|doc| bson::from_document(doc).map_err(AppError::from))
        .collect()
}
