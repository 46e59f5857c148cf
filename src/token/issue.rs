//! HS256 signing of claim sets.
//! Used by: handlers::issue, state.

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use crate::config::SigningConfig;
use crate::error::Result;
use crate::token::claims::Claims;

/// How the issuer sees a user.
pub trait TokenSubject {
    fn id(&self) -> i64;
    fn username(&self) -> &str;
}

/// Role derivation lives with the caller; access tokens only need the
/// resolved primary role name.
pub trait RoleSource: TokenSubject {
    fn primary_role(&self) -> &str;
}

/// Access token plus the user id echoed back for the login response.
#[derive(Debug)]
pub struct AccessTokenGrant {
    pub id: i64,
    pub access_token: String,
}

/// Stateless issuer: immutable configuration and a prebuilt encoding
/// key, safe to share across request handlers.
pub struct TokenIssuer {
    config: SigningConfig,
    encoding_key: EncodingKey,
}

impl TokenIssuer {
    pub fn new(config: SigningConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(&config.key);
        Self {
            config,
            encoding_key,
        }
    }

    pub fn config(&self) -> &SigningConfig {
        &self.config
    }

    pub fn issue_access_token(
        &self,
        user: &dyn RoleSource,
        person_id: i64,
    ) -> Result<AccessTokenGrant> {
        let claims = Claims::access(user.id(), user.username(), person_id, user.primary_role());
        let access_token = self.sign(claims)?;
        Ok(AccessTokenGrant {
            id: user.id(),
            access_token,
        })
    }

    pub fn issue_reset_token(&self, email: &str) -> Result<String> {
        self.sign(Claims::password_reset(email))
    }

    pub fn issue_confirmation_token(&self, user: &dyn TokenSubject) -> Result<String> {
        self.sign(Claims::registration_confirmation(user.id(), user.username()))
    }

    fn sign(&self, mut claims: Claims) -> Result<String> {
        claims.iss = self.config.issuer.clone();
        claims.aud = self.config.audience.clone();
        Ok(encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding_key,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use jsonwebtoken::errors::ErrorKind;
    use jsonwebtoken::{decode, DecodingKey, TokenData, Validation};

    use super::*;

    struct Visitor {
        id: i64,
        username: String,
        role: String,
    }

    impl TokenSubject for Visitor {
        fn id(&self) -> i64 {
            self.id
        }
        fn username(&self) -> &str {
            &self.username
        }
    }

    impl RoleSource for Visitor {
        fn primary_role(&self) -> &str {
            &self.role
        }
    }

    fn alice() -> Visitor {
        Visitor {
            id: 42,
            username: "alice".into(),
            role: "Tourist".into(),
        }
    }

    fn test_issuer() -> TokenIssuer {
        TokenIssuer::new(SigningConfig::with_defaults(b"test_signing_key".to_vec()))
    }

    fn decode_with(
        token: &str,
        config: &SigningConfig,
    ) -> jsonwebtoken::errors::Result<TokenData<Claims>> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        decode::<Claims>(token, &DecodingKey::from_secret(&config.key), &validation)
    }

    #[test]
    fn access_token_roundtrips_exactly() {
        let issuer = test_issuer();
        let grant = issuer.issue_access_token(&alice(), 7).unwrap();
        assert_eq!(grant.id, 42);

        let claims = decode_with(&grant.access_token, issuer.config()).unwrap().claims;
        assert_eq!(claims.id.as_deref(), Some("42"));
        assert_eq!(claims.username.as_deref(), Some("alice"));
        assert_eq!(claims.person_id.as_deref(), Some("7"));
        assert_eq!(claims.role.as_deref(), Some("Tourist"));
        assert_eq!(claims.iss, "explorer");
        assert_eq!(claims.aud, "explorer-front.com");

        let hundred_days_out = (Utc::now() + Duration::days(100)).timestamp();
        assert!((claims.exp - hundred_days_out).abs() <= 5);
    }

    #[test]
    fn reset_token_carries_only_the_email() {
        let issuer = test_issuer();
        let token = issuer.issue_reset_token("alice@example.com").unwrap();

        let claims = decode_with(&token, issuer.config()).unwrap().claims;
        assert_eq!(claims.email.as_deref(), Some("alice@example.com"));
        assert!(claims.id.is_none());
        assert!(claims.username.is_none());
        assert!(claims.role.is_none());

        let fifteen_minutes_out = (Utc::now() + Duration::minutes(15)).timestamp();
        assert!((claims.exp - fifteen_minutes_out).abs() <= 5);
    }

    #[test]
    fn confirmation_token_roundtrips() {
        let issuer = test_issuer();
        let token = issuer.issue_confirmation_token(&alice()).unwrap();

        let claims = decode_with(&token, issuer.config()).unwrap().claims;
        assert_eq!(claims.id.as_deref(), Some("42"));
        assert_eq!(claims.username.as_deref(), Some("alice"));
        assert_eq!(claims.confirm.as_deref(), Some("true"));

        let fifteen_minutes_out = (Utc::now() + Duration::minutes(15)).timestamp();
        assert!((claims.exp - fifteen_minutes_out).abs() <= 5);
    }

    #[test]
    fn repeated_issuance_yields_distinct_jtis() {
        let issuer = test_issuer();
        let first = issuer.issue_access_token(&alice(), 7).unwrap();
        let second = issuer.issue_access_token(&alice(), 7).unwrap();
        assert_ne!(first.access_token, second.access_token);

        let jti_a = decode_with(&first.access_token, issuer.config()).unwrap().claims.jti;
        let jti_b = decode_with(&second.access_token, issuer.config()).unwrap().claims.jti;
        assert_ne!(jti_a, jti_b);
    }

    #[test]
    fn token_signed_with_other_key_fails_verification() {
        let issuer = test_issuer();
        let other = SigningConfig::with_defaults(b"a_different_key".to_vec());

        let grant = issuer.issue_access_token(&alice(), 7).unwrap();
        let err = decode_with(&grant.access_token, &other).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidSignature));
    }

    #[test]
    fn issuer_and_audience_come_from_config() {
        let config = SigningConfig::new(b"k".to_vec(), "staging", "staging-front");
        let issuer = TokenIssuer::new(config);
        let token = issuer.issue_reset_token("a@b.com").unwrap();

        let claims = decode_with(&token, issuer.config()).unwrap().claims;
        assert_eq!(claims.iss, "staging");
        assert_eq!(claims.aud, "staging-front");

        // A verifier expecting the production identity must reject it.
        let production = SigningConfig::new(b"k".to_vec(), "explorer", "explorer-front.com");
        assert!(decode_with(&token, &production).is_err());
    }
}
