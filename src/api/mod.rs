//! API handlers for Bookshelf REST endpoints

pub mod books;
pub mod users;

use axum::{
    async_trait,
    extract::{
        rejection::{FormRejection, JsonRejection, PathRejection},
        FromRequest, FromRequestParts, Path, Request,
    },
    http::{header::CONTENT_TYPE, StatusCode},
    routing::get,
    Form, Json, Router,
};
use serde::{de::DeserializeOwned, Serialize};
use tower_http::trace::TraceLayer;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    AppState,
};

/// Success side of the response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Every successful operation answers 201 with an envelope
pub type Created<T> = (StatusCode, Json<ApiResponse<T>>);

pub(crate) fn created<T>(message: &str, data: Option<T>) -> Created<T> {
    (
        StatusCode::CREATED,
        Json(ApiResponse {
            message: message.to_string(),
            data,
        }),
    )
}

/// Path parameters whose extraction failures are reported through the envelope
#[derive(FromRequestParts)]
#[from_request(via(Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Request body, read as URL-encoded form data when the request says so and
/// as JSON otherwise
pub struct Payload<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map_or(false, |value| value.starts_with(FORM_CONTENT_TYPE));

        if is_form {
            let Form(value) = Form::<T>::from_request(req, state).await?;
            Ok(Self(value))
        } else {
            let Json(value) = Json::<T>::from_request(req, state).await?;
            Ok(Self(value))
        }
    }
}

/// Body that must pass its declared field rules before the handler runs.
///
/// A failing payload is rejected here, so the handler (and the write it
/// performs) is never reached.
pub struct ValidatedPayload<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedPayload<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Payload(value) = Payload::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// Reject blank path parameters
pub(crate) fn path_param<'a>(value: &'a str, message: &str) -> AppResult<&'a str> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(message.to_string()));
    }
    Ok(value)
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    // Lookup by name and mutation by id share one path segment
    Router::new()
        .route("/books", get(books::list_books).post(books::create_book))
        .route(
            "/books/:key",
            get(books::find_books)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/:key",
            get(users::find_users)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
