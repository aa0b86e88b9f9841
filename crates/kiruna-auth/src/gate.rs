//! Per-route role gate.

use kiruna_core::models::{Role, User};

use crate::error::AuthError;

/// Check that the user's role is in the route's allowed set.
///
/// A flat membership test, applied as a precondition per route. There is no
/// role hierarchy and no resource-level ACLs.
pub fn authorize(user: &User, allowed: &[Role]) -> Result<(), AuthError> {
    if allowed.contains(&user.role) {
        Ok(())
    } else {
        tracing::debug!(role = ?user.role, ?allowed, "Role not permitted");
        Err(AuthError::Forbidden { role: user.role })
    }
}
