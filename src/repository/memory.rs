//! In-memory document store used by tests

use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document};

use super::DocumentStore;
use crate::{
    error::AppResult,
    models::{DeleteOutcome, UpdateOutcome},
};

#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently held in a collection
    pub fn count(&self, collection: &str) -> usize {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .map_or(0, Vec::len)
    }

    /// Raw stored documents of a collection
    pub fn documents(&self, collection: &str) -> Vec<Document> {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }
}

fn has_id(doc: &Document, id: &ObjectId) -> bool {
    doc.get_object_id("_id").map_or(false, |doc_id| doc_id == *id)
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(&self, collection: &str, mut record: Document) -> AppResult<ObjectId> {
        let id = ObjectId::new();
        record.insert("_id", id);
        self.collections
            .lock()
            .unwrap()
            .entry(collection.to_string())
            .or_default()
            .push(record);
        Ok(id)
    }

    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> AppResult<Vec<Document>> {
        let expected = Bson::String(value.to_string());
        Ok(self
            .documents(collection)
            .into_iter()
            .filter(|doc| doc.get(field) == Some(&expected))
            .collect())
    }

    async fn find_all(&self, collection: &str) -> AppResult<Vec<Document>> {
        Ok(self.documents(collection))
    }

    async fn update_by_id(
        &self,
        collection: &str,
        id: ObjectId,
        fields: Document,
    ) -> AppResult<UpdateOutcome> {
        let mut collections = self.collections.lock().unwrap();
        let target = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|doc| has_id(doc, &id)));

        let Some(doc) = target else {
            return Ok(UpdateOutcome {
                matched_count: 0,
                modified_count: 0,
            });
        };

        let mut modified = false;
        for (key, value) in fields {
            if doc.get(&key) != Some(&value) {
                doc.insert(key, value);
                modified = true;
            }
        }

        Ok(UpdateOutcome {
            matched_count: 1,
            modified_count: u64::from(modified),
        })
    }

    async fn delete_by_id(&self, collection: &str, id: ObjectId) -> AppResult<DeleteOutcome> {
        let mut collections = self.collections.lock().unwrap();
        let Some(docs) = collections.get_mut(collection) else {
            return Ok(DeleteOutcome { deleted_count: 0 });
        };

        let before = docs.len();
        if let Some(pos) = docs.iter().position(|doc| has_id(doc, &id)) {
            docs.remove(pos);
        }

        Ok(DeleteOutcome {
            deleted_count: (before - docs.len()) as u64,
        })
    }
}
