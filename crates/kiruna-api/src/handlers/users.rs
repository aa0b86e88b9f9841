use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use kiruna_auth::{authorize, password};
use kiruna_core::error::{KirunaError, ValidationErrorKind};
use kiruna_core::models::{NewUser, Role, User, UserId};

use crate::error::ApiError;
use crate::extract::CurrentUser;
use crate::state::AppState;

pub async fn register_user(
    State(state): State<Arc<AppState>>,
    Json(new): Json<NewUser>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let email = new.email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(KirunaError::invalid(
            ValidationErrorKind::InvalidField,
            "email",
            "a valid email address is required",
        )
        .into());
    }
    if new.password.len() < 8 {
        return Err(KirunaError::invalid(
            ValidationErrorKind::InvalidField,
            "password",
            "must be at least 8 characters",
        )
        .into());
    }

    let user = User {
        id: UserId::new(),
        name: new.name,
        surname: new.surname,
        email,
        password_hash: password::hash(&new.password),
        phone: new.phone,
        role: new.role,
    };

    // Duplicate email surfaces as a 409 from the store's unique check.
    let user = state.users.create_user(user).await?;

    tracing::info!(id = %user.id, role = ?user.role, "Registered user");
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn list_users(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<User>>, ApiError> {
    authorize(&user, &[Role::Planner, Role::Developer])?;
    let users = state.users.list_users().await?;
    Ok(Json(users))
}
