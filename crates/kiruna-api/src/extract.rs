//! Request extractors for authenticated routes.

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use kiruna_auth::token::AUTH_COOKIE;
use kiruna_auth::AuthError;
use kiruna_core::models::User;

use crate::error::ApiError;
use crate::state::AppState;

/// The authenticated user resolved from the auth cookie.
///
/// Missing cookie is 401; a tampered or expired token is 400; a valid token
/// whose user no longer exists is 401 again.
pub struct CurrentUser(pub User);

impl FromRequestParts<Arc<AppState>> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = cookie_value(parts, AUTH_COOKIE).ok_or(AuthError::MissingCredential)?;
        let user_id = state.tokens.verify(&token)?;

        let user = state
            .users
            .get_user(user_id)
            .await?
            .ok_or(AuthError::UnknownUser)?;

        Ok(CurrentUser(user))
    }
}

/// Find a cookie by name across all Cookie headers
fn cookie_value(parts: &Parts, name: &str) -> Option<String> {
    parts
        .headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(cookie_name, _)| *cookie_name == name)
        .map(|(_, value)| value.to_string())
}
