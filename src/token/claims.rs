//! Claim sets for Explorer-issued tokens.
//! Used by: token::issue, handlers::issue.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Access tokens back a long-lived frontend session.
const ACCESS_LIFETIME_MINUTES: i64 = 60 * 24 * 100;
/// Reset and confirmation links are emailed; keep the window short.
const SHORT_LIFETIME_MINUTES: i64 = 15;

/// One claim set covers all three token kinds; a kind is distinguished
/// by which optional claims are present, never by a separate type.
/// Custom claim values are always strings, so `id=42` travels as "42".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    pub jti: String,
    pub iss: String,
    pub aud: String,
    pub exp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(rename = "personId", skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<String>,
}

impl Claims {
    /// Fresh jti and expiry; issuer/audience are stamped at signing time.
    fn base(lifetime_minutes: i64) -> Self {
        Self {
            jti: uuid::Uuid::new_v4().to_string(),
            iss: String::new(),
            aud: String::new(),
            exp: (Utc::now() + Duration::minutes(lifetime_minutes)).timestamp(),
            id: None,
            username: None,
            person_id: None,
            role: None,
            email: None,
            confirm: None,
        }
    }

    pub fn access(id: i64, username: &str, person_id: i64, role: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            username: Some(username.to_string()),
            person_id: Some(person_id.to_string()),
            role: Some(role.to_string()),
            ..Self::base(ACCESS_LIFETIME_MINUTES)
        }
    }

    pub fn password_reset(email: &str) -> Self {
        Self {
            email: Some(email.to_string()),
            ..Self::base(SHORT_LIFETIME_MINUTES)
        }
    }

    pub fn registration_confirmation(id: i64, username: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            username: Some(username.to_string()),
            confirm: Some("true".to_string()),
            ..Self::base(SHORT_LIFETIME_MINUTES)
        }
    }
}
