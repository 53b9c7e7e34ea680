//! Book endpoints

use axum::extract::State;

use super::{created, path_param, AppPath, Created, Payload, ValidatedPayload};
use crate::{
    error::AppResult,
    models::{Book, CreateBook, DeleteOutcome, UpdateBook, UpdateOutcome},
    AppState,
};

/// Create a new book
pub async fn create_book(
    State(state): State<AppState>,
    ValidatedPayload(book): ValidatedPayload<CreateBook>,
) -> AppResult<Created<()>> {
    state.services.books.create_book(book).await?;
    Ok(created("Book created successfully", None))
}

/// List every book
pub async fn list_books(State(state): State<AppState>) -> AppResult<Created<Vec<Book>>> {
    let books = state.services.books.list_books().await?;
    Ok(created("Search completed successfully", Some(books)))
}

/// Find books by exact name
pub async fn find_books(
    State(state): State<AppState>,
    AppPath(name): AppPath<String>,
) -> AppResult<Created<Vec<Book>>> {
    let name = path_param(&name, "Invalid search")?;
    let books = state.services.books.find_books(name).await?;
    Ok(created("Search completed successfully", Some(books)))
}

/// Update the supplied fields of a book
pub async fn update_book(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
    Payload(book): Payload<UpdateBook>,
) -> AppResult<Created<UpdateOutcome>> {
    let id = path_param(&id, "Invalid action")?;
    let outcome = state.services.books.update_book(id, book).await?;
    Ok(created("Book updated successfully", Some(outcome)))
}

/// Delete a book
pub async fn delete_book(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> AppResult<Created<DeleteOutcome>> {
    let id = path_param(&id, "Invalid action")?;
    let outcome = state.services.books.delete_book(id).await?;
    Ok(created("Book removed successfully", Some(outcome)))
}
