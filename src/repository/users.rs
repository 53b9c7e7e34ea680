//! Users repository for database operations
//!
//! Passwords reach this layer already hashed; nothing here inspects them.

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use super::{decode_all, encode, DocumentStore};
use crate::{
    error::AppResult,
    models::{DeleteOutcome, NewUser, UpdateOutcome, UpdateUser, User},
};

const COLLECTION: &str = "users";

#[derive(Clone)]
pub struct UsersRepository {
    store: Arc<dyn DocumentStore>,
}

impl UsersRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn insert(&self, user: &NewUser) -> AppResult<ObjectId> {
        self.store.insert(COLLECTION, encode(user)?).await
    }

    pub async fn find_by_name(&self, name: &str) -> AppResult<Vec<User>> {
        let docs = self.store.find_by_field(COLLECTION, "name", name).await?;
        decode_all(docs)
    }

    pub async fn find_all(&self) -> AppResult<Vec<User>> {
        let docs = self.store.find_all(COLLECTION).await?;
        decode_all(docs)
    }

    pub async fn update_by_id(&self, id: ObjectId, user: &UpdateUser) -> AppResult<UpdateOutcome> {
        self.store.update_by_id(COLLECTION, id, encode(user)?).await
    }

    pub async fn delete_by_id(&self, id: ObjectId) -> AppResult<DeleteOutcome> {
        self.store.delete_by_id(COLLECTION, id).await
    }
}
