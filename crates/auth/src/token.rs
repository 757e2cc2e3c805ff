use std::sync::Arc;

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::claims::{TokenClaims, validate_claims};
use crate::credentials::CredentialStore;

/// Lifetime of an issued token, in seconds.
pub const TOKEN_TTL_SECS: i64 = 3600;

/// The single failure kind for token validation.
///
/// Expired, forged, malformed, missing-claim, and not-yet-valid tokens are
/// deliberately indistinguishable at this layer; callers only learn
/// valid/invalid.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("invalid token")]
pub struct InvalidToken;

#[derive(Debug, Error)]
pub enum LoginError {
    /// Unknown username and wrong password both map here, uniformly.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("failed to sign token")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

/// Validation contract consumed by the authorization gate.
pub trait TokenValidator: Send + Sync {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<TokenClaims, InvalidToken>;
}

/// HS256 signing/verification authority over a shared secret.
pub struct Hs256TokenAuthority {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl Hs256TokenAuthority {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // The claim window is clock-skew intolerant.
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    pub fn sign(&self, claims: &TokenClaims) -> Result<String, jsonwebtoken::errors::Error> {
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
    }
}

impl TokenValidator for Hs256TokenAuthority {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<TokenClaims, InvalidToken> {
        // Signature, structure, and `exp` are checked by the decoder; a
        // missing `iat` fails claim deserialization. The remaining window
        // rule (`iat <= now`) is the pure claims check.
        let decoded = jsonwebtoken::decode::<TokenClaims>(token, &self.decoding, &self.validation)
            .map_err(|_| InvalidToken)?;
        validate_claims(&decoded.claims, now).map_err(|_| InvalidToken)?;
        Ok(decoded.claims)
    }
}

/// Issues tokens from credentials and validates presented tokens.
pub struct TokenService {
    store: Arc<dyn CredentialStore>,
    authority: Hs256TokenAuthority,
}

impl TokenService {
    pub fn new(store: Arc<dyn CredentialStore>, authority: Hs256TokenAuthority) -> Self {
        Self { store, authority }
    }

    /// Mint a signed token for a username/password pair.
    ///
    /// The credential failure is uniform: the caller cannot tell an unknown
    /// user from a wrong password.
    pub fn issue(
        &self,
        username: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<String, LoginError> {
        let record = self
            .store
            .find(username)
            .filter(|u| u.password == password)
            .ok_or(LoginError::InvalidCredentials)?;

        let iat = now.timestamp();
        let claims = TokenClaims {
            sub: record.id,
            roles: record.roles,
            iat,
            exp: iat + TOKEN_TTL_SECS,
        };

        Ok(self.authority.sign(&claims)?)
    }
}

impl TokenValidator for TokenService {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<TokenClaims, InvalidToken> {
        self.authority.validate(token, now)
    }
}
