//! User model and related types

use mongodb::bson::{oid::ObjectId, serde_helpers::serialize_object_id_as_hex_string};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// User as stored in the `users` collection.
///
/// `password` always holds the peppered SHA-256 digest, never the plaintext.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub role: String,
}

/// Create user request; fields stay raw JSON until the rules accept them
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUser {
    #[serde(default)]
    #[validate(custom(
        function = "crate::models::non_empty_string",
        message = "Name must be a non-empty string"
    ))]
    pub name: Value,
    #[serde(default)]
    #[validate(custom(
        function = "crate::models::password_string",
        message = "Password must be a string of at least 6 characters"
    ))]
    pub password: Value,
    #[serde(default)]
    #[validate(custom(
        function = "crate::models::non_empty_string",
        message = "Role must be a non-empty string"
    ))]
    pub role: Value,
}

/// User record handed to the repository on insert, password already hashed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewUser {
    pub name: String,
    pub password: String,
    pub role: String,
}

/// Partial user update; only supplied fields are written
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}
