use std::sync::Arc;

use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse},
    Json,
};
use kiruna_auth::password;
use kiruna_auth::token::AUTH_COOKIE;

use crate::dto::{LoginRequest, StatusResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Verify email and password, then set the auth cookie.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .users
        .find_user_by_email(request.email.trim())
        .await?
        .filter(|user| password::verify(&request.password, &user.password_hash))
        // one message for both failures, so login probes cannot tell an
        // unknown email from a wrong password
        .ok_or_else(|| ApiError::unauthenticated("Invalid email or password"))?;

    let token = state.tokens.issue(user.id)?;
    let cookie = format!(
        "{AUTH_COOKIE}={token}; HttpOnly; SameSite=Lax; Path=/; Max-Age={}",
        state.auth.token_ttl_secs
    );

    tracing::info!(id = %user.id, "User logged in");
    Ok((AppendHeaders([(SET_COOKIE, cookie)]), Json(user)))
}

/// Clear the auth cookie.
pub async fn logout() -> impl IntoResponse {
    let cookie = format!("{AUTH_COOKIE}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0");
    (
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(StatusResponse::success("Logged out")),
    )
}
