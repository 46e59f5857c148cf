//! Token issuance endpoints with input validation.
//! Used by: server.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::console;
use crate::error::{Error, Result};
use crate::state::AppState;
use crate::token::issue::{RoleSource, TokenSubject};

#[derive(Deserialize)]
pub struct AccessTokenRequest {
    pub id: i64,
    pub username: String,
    pub role: String,
    pub person_id: i64,
}

impl TokenSubject for AccessTokenRequest {
    fn id(&self) -> i64 {
        self.id
    }
    fn username(&self) -> &str {
        &self.username
    }
}

// The caller resolves the user's primary role before asking for a
// token; the request carries it already flattened.
impl RoleSource for AccessTokenRequest {
    fn primary_role(&self) -> &str {
        &self.role
    }
}

#[derive(Serialize)]
pub struct AccessTokenResponse {
    pub id: i64,
    pub access_token: String,
}

#[derive(Deserialize)]
pub struct ResetTokenRequest {
    pub user_id: i64,
    pub email: String,
}

#[derive(Serialize)]
pub struct ResetTokenResponse {
    pub reset_token: String,
}

#[derive(Deserialize)]
pub struct ConfirmationTokenRequest {
    pub id: i64,
    pub username: String,
}

impl TokenSubject for ConfirmationTokenRequest {
    fn id(&self) -> i64 {
        self.id
    }
    fn username(&self) -> &str {
        &self.username
    }
}

#[derive(Serialize)]
pub struct ConfirmationTokenResponse {
    pub confirmation_token: String,
}

fn validate_id(name: &str, id: i64) -> Result<()> {
    if id < 1 {
        return Err(Error::Validation(format!("{} must be positive", name)));
    }
    Ok(())
}

fn validate_username(username: &str) -> Result<()> {
    if username.is_empty() || username.len() > 64 {
        return Err(Error::Validation("username must be 1-64 characters".into()));
    }
    if username.chars().any(|c| c.is_control() || c.is_whitespace()) {
        return Err(Error::Validation(
            "username contains whitespace or control characters".into(),
        ));
    }
    Ok(())
}

fn validate_role(role: &str) -> Result<()> {
    if role.is_empty()
        || role.len() > 64
        || !role.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(Error::Validation(
            "role must be 1-64 alphanumeric/underscore chars".into(),
        ));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<()> {
    if email.len() < 3 || email.len() > 256 {
        return Err(Error::Validation("email must be 3-256 characters".into()));
    }
    if !email.contains('@') || email.chars().any(|c| c.is_control() || c.is_whitespace()) {
        return Err(Error::Validation("email is not a plausible address".into()));
    }
    Ok(())
}

fn validate_access(req: &AccessTokenRequest) -> Result<()> {
    validate_id("id", req.id)?;
    validate_id("person_id", req.person_id)?;
    validate_username(&req.username)?;
    validate_role(&req.role)
}

fn validate_reset(req: &ResetTokenRequest) -> Result<()> {
    validate_id("user_id", req.user_id)?;
    validate_email(&req.email)
}

fn validate_confirmation(req: &ConfirmationTokenRequest) -> Result<()> {
    validate_id("id", req.id)?;
    validate_username(&req.username)
}

pub async fn access(
    State(state): State<AppState>,
    Json(req): Json<AccessTokenRequest>,
) -> Result<Json<AccessTokenResponse>> {
    state.increment_requests();
    validate_access(&req).inspect_err(|_| state.metrics.record_reject())?;

    let grant = state.issuer.issue_access_token(&req, req.person_id)?;
    tracing::info!(id = req.id, username = %req.username, role = %req.role, "access token issued");
    console::log_access(&req.username, &req.role);
    state.metrics.record_access();
    Ok(Json(AccessTokenResponse {
        id: grant.id,
        access_token: grant.access_token,
    }))
}

pub async fn reset(
    State(state): State<AppState>,
    Json(req): Json<ResetTokenRequest>,
) -> Result<Json<ResetTokenResponse>> {
    state.increment_requests();
    validate_reset(&req).inspect_err(|_| state.metrics.record_reject())?;

    // user_id identifies the account in the audit trail; the claim set
    // itself carries only the email.
    let reset_token = state.issuer.issue_reset_token(&req.email)?;
    tracing::info!(user_id = req.user_id, "password reset token issued");
    console::log_reset(req.user_id);
    state.metrics.record_reset();
    Ok(Json(ResetTokenResponse { reset_token }))
}

pub async fn confirmation(
    State(state): State<AppState>,
    Json(req): Json<ConfirmationTokenRequest>,
) -> Result<Json<ConfirmationTokenResponse>> {
    state.increment_requests();
    validate_confirmation(&req).inspect_err(|_| state.metrics.record_reject())?;

    let confirmation_token = state.issuer.issue_confirmation_token(&req)?;
    tracing::info!(id = req.id, username = %req.username, "registration confirmation token issued");
    console::log_confirmation(&req.username);
    state.metrics.record_confirmation();
    Ok(Json(ConfirmationTokenResponse { confirmation_token }))
}
