//! User handlers
//!
//! Endpoints for the user CRUD surface. Handlers stay thin: shape checks,
//! id parsing, delegation to the user service, and status selection. The
//! error-to-status mapping itself lives on `AppError`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{CreateUser, User, UserId, UserUpdate};
use crate::error::AppError;
use crate::AppState;

/// Request body for creating a user
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub username: String,
    pub email: String,
}

/// Request body for updating a user. Absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub id: String,
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
}

/// Response body for a single user
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            username: user.username,
            email: user.email,
        }
    }
}

fn require_not_blank(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!(
            "{} is required and cannot be blank",
            field
        )));
    }
    Ok(())
}

fn parse_user_id(raw: &str) -> Result<UserId, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest("invalid user id".to_string()))
}

/// POST /users
///
/// Create a new user. The identifier is generated server-side.
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    require_not_blank("name", &request.name)?;
    require_not_blank("username", &request.username)?;
    require_not_blank("email", &request.email)?;

    let user = state
        .user_service
        .create(CreateUser {
            name: request.name,
            username: request.username,
            email: request.email,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.user_service.find_all().await?;

    Ok(Json(users.into_iter().map(|u| u.into()).collect()))
}

/// GET /users/:id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let id = parse_user_id(&id)?;
    let user = state.user_service.find_by_id(&id).await?;

    Ok(Json(user.into()))
}

/// PUT /users
///
/// Partial update; the id travels in the body. Returns the record as it
/// stands after the update.
pub async fn update_user(
    State(state): State<AppState>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let id = parse_user_id(&request.id)?;
    for (field, value) in [
        ("name", &request.name),
        ("username", &request.username),
        ("email", &request.email),
    ] {
        if let Some(value) = value {
            require_not_blank(field, value)?;
        }
    }

    let user = state
        .user_service
        .update(UserUpdate {
            id,
            name: request.name,
            username: request.username,
            email: request.email,
        })
        .await?;

    Ok(Json(user.into()))
}

/// DELETE /users/:id
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_user_id(&id)?;
    state.user_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
