use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Claim set carried by every issued token.
///
/// Timestamps are unix seconds, matching the JWT payload representation used
/// by the HS256 codec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject: the authenticated principal's id.
    pub sub: String,

    /// Roles granted to the subject.
    pub roles: Vec<String>,

    /// Issued-at timestamp (unix seconds).
    pub iat: i64,

    /// Expiration timestamp (unix seconds).
    pub exp: i64,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ClaimsError {
    #[error("token has expired")]
    Expired,

    #[error("token not yet valid (iat is in the future)")]
    NotYetValid,
}

/// Deterministically validate the claim time window.
///
/// Note: this validates the *claims* only. Signature verification lives in
/// the codec. No leeway is applied anywhere: `iat <= now <= exp` must hold
/// exactly at validation time.
pub fn validate_claims(claims: &TokenClaims, now: DateTime<Utc>) -> Result<(), ClaimsError> {
    let now = now.timestamp();
    if claims.iat > now {
        return Err(ClaimsError::NotYetValid);
    }
    if claims.exp < now {
        return Err(ClaimsError::Expired);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(iat: i64, exp: i64) -> TokenClaims {
        TokenClaims {
            sub: "u1".to_string(),
            roles: vec!["customer".to_string()],
            iat,
            exp,
        }
    }

    #[test]
    fn current_window_is_valid() {
        let now = Utc::now();
        let t = now.timestamp();
        assert_eq!(validate_claims(&claims(t - 10, t + 10), now), Ok(()));
    }

    #[test]
    fn window_edges_are_inclusive() {
        let now = Utc::now();
        let t = now.timestamp();
        assert_eq!(validate_claims(&claims(t, t + 10), now), Ok(()));
        assert_eq!(validate_claims(&claims(t - 10, t), now), Ok(()));
    }

    #[test]
    fn future_iat_is_not_yet_valid() {
        let now = Utc::now();
        let t = now.timestamp();
        assert_eq!(
            validate_claims(&claims(t + 1000, t + 2000), now),
            Err(ClaimsError::NotYetValid)
        );
    }

    #[test]
    fn past_exp_is_expired() {
        let now = Utc::now();
        let t = now.timestamp();
        assert_eq!(
            validate_claims(&claims(t - 7200, t - 3600), now),
            Err(ClaimsError::Expired)
        );
    }
}
