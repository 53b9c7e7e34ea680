//! User management endpoints

use axum::extract::State;

use super::{created, path_param, AppPath, Created, Payload, ValidatedPayload};
use crate::{
    error::AppResult,
    models::{CreateUser, DeleteOutcome, UpdateOutcome, UpdateUser, User},
    AppState,
};

/// Create a new user; the password is stored hashed
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedPayload(user): ValidatedPayload<CreateUser>,
) -> AppResult<Created<()>> {
    state.services.users.create_user(user).await?;
    Ok(created("User created successfully", None))
}

pub async fn list_users(State(state): State<AppState>) -> AppResult<Created<Vec<User>>> {
    let users = state.services.users.list_users().await?;
    Ok(created("Search completed successfully", Some(users)))
}

/// Find users by exact name
pub async fn find_users(
    State(state): State<AppState>,
    AppPath(name): AppPath<String>,
) -> AppResult<Created<Vec<User>>> {
    let name = path_param(&name, "Invalid search")?;
    let users = state.services.users.find_users(name).await?;
    Ok(created("Search completed successfully", Some(users)))
}

pub async fn update_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
    Payload(user): Payload<UpdateUser>,
) -> AppResult<Created<UpdateOutcome>> {
    let id = path_param(&id, "Invalid action")?;
    let outcome = state.services.users.update_user(id, user).await?;
    Ok(created("User updated successfully", Some(outcome)))
}

pub async fn delete_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> AppResult<Created<DeleteOutcome>> {
    let id = path_param(&id, "Invalid action")?;
    let outcome = state.services.users.delete_user(id).await?;
    Ok(created("User removed successfully", Some(outcome)))
}
