//! MongoDB-backed document store

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    Client, Database,
};

use super::DocumentStore;
use crate::{
    config::DatabaseConfig,
    error::{AppError, AppResult},
    models::{DeleteOutcome, UpdateOutcome},
};

/// Handle on one MongoDB database.
///
/// `Client` pools connections internally, so a single handle is shared by
/// every request.
#[derive(Clone)]
pub struct MongoStore {
    client: Client,
    db: Database,
}

impl MongoStore {
    /// Connect to the configured server and select the configured database
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let (url, name) = match (config.url.as_deref(), config.name.as_deref()) {
            (Some(url), Some(name)) if !url.is_empty() && !name.is_empty() => (url, name),
            _ => {
                return Err(AppError::Configuration(
                    "Missing MongoDB configuration: database.url and database.name are required"
                        .to_string(),
                ))
            }
        };

        let client = Client::with_uri_str(url).await?;
        let db = client.database(name);

        // The driver connects lazily; ping so that an unreachable server fails startup
        db.run_command(doc! { "ping": 1 }, None).await?;

        tracing::info!("Connected to MongoDB database '{}'", name);

        Ok(Self { client, db })
    }

    /// Close all pooled connections
    pub async fn shutdown(self) {
        self.client.shutdown().await;
        tracing::info!("MongoDB client shut down");
    }

    fn collection(&self, name: &str) -> mongodb::Collection<Document> {
        self.db.collection::<Document>(name)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert(&self, collection: &str, record: Document) -> AppResult<ObjectId> {
        let result = self.collection(collection).insert_one(record, None).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::Internal("Inserted document has no ObjectId".to_string()))
    }

    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> AppResult<Vec<Document>> {
        let mut filter = Document::new();
        filter.insert(field, value);

        let cursor = self.collection(collection).find(filter, None).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_all(&self, collection: &str) -> AppResult<Vec<Document>> {
        let cursor = self.collection(collection).find(None, None).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn update_by_id(
        &self,
        collection: &str,
        id: ObjectId,
        fields: Document,
    ) -> AppResult<UpdateOutcome> {
        let coll = self.collection(collection);

        // MongoDB rejects an empty $set
        if fields.is_empty() {
            let matched = coll.count_documents(doc! { "_id": id }, None).await?;
            return Ok(UpdateOutcome {
                matched_count: matched,
                modified_count: 0,
            });
        }

        let result = coll
            .update_one(doc! { "_id": id }, doc! { "$set": fields }, None)
            .await?;

        Ok(UpdateOutcome {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    async fn delete_by_id(&self, collection: &str, id: ObjectId) -> AppResult<DeleteOutcome> {
        let result = self
            .collection(collection)
            .delete_one(doc! { "_id": id }, None)
            .await?;

        Ok(DeleteOutcome {
            deleted_count: result.deleted_count,
        })
    }
}
