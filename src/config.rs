//! Signing configuration, read once from the environment at startup.
//! Used by: token::issue, main.

use crate::error::{Error, Result};

const DEFAULT_ISSUER: &str = "explorer";
const DEFAULT_AUDIENCE: &str = "explorer-front.com";

/// Immutable signing material and token identity, built once and
/// passed into the issuer. A missing or empty `JWT_KEY` is a startup
/// error: a fallback secret would make every issued token forgeable.
#[derive(Debug, Clone)]
pub struct SigningConfig {
    pub key: Vec<u8>,
    pub issuer: String,
    pub audience: String,
}

impl SigningConfig {
    pub fn new(
        key: impl Into<Vec<u8>>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            issuer: issuer.into(),
            audience: audience.into(),
        }
    }

    /// Explicit key, default issuer/audience identity.
    pub fn with_defaults(key: impl Into<Vec<u8>>) -> Self {
        Self::new(key, DEFAULT_ISSUER, DEFAULT_AUDIENCE)
    }

    pub fn from_env() -> Result<Self> {
        let key = std::env::var("JWT_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or(Error::MissingKey)?;
        let mut config = Self::with_defaults(key.into_bytes());
        if let Ok(issuer) = std::env::var("JWT_ISSUER") {
            config.issuer = issuer;
        }
        if let Ok(audience) = std::env::var("JWT_AUDIENCE") {
            config.audience = audience;
        }
        Ok(config)
    }
}
