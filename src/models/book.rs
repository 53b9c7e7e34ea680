//! Book model and related types

use mongodb::bson::{oid::ObjectId, serde_helpers::serialize_object_id_as_hex_string};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// Book as stored in the `books` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub published_date: String,
}

/// Create book request.
///
/// Fields are kept as raw JSON so that a value of the wrong type is reported
/// by the field rules alongside every other violation.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBook {
    #[serde(default)]
    #[validate(custom(
        function = "crate::models::non_empty_string",
        message = "Name must be a non-empty string"
    ))]
    pub name: Value,
    #[serde(default)]
    #[validate(custom(
        function = "crate::models::non_empty_string",
        message = "Author must be a non-empty string"
    ))]
    pub author: Value,
    #[serde(default)]
    #[serde(rename = "publishedDate")]
    #[validate(custom(
        function = "crate::models::non_empty_string",
        message = "Published date must be a non-empty string"
    ))]
    pub published_date: Value,
}

/// Book record handed to the repository on insert (no identifier yet)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    pub name: String,
    pub author: String,
    pub published_date: String,
}

/// Partial book update; only supplied fields are written
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBook {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
}

impl TryFrom<CreateBook> for NewBook {
    type Error = crate::error::AppError;

    fn try_from(book: CreateBook) -> Result<Self, Self::Error> {
        Ok(Self {
            name: super::string_field("name", book.name)?,
            author: super::string_field("author", book.author)?,
            published_date: super::string_field("publishedDate", book.published_date)?,
        })
    }
}
