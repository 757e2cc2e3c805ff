//! `vigil-auth` — token issuance and validation boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: the
//! credential source is an injected capability, and signing/verification is
//! self-contained behind the HS256 authority.

pub mod claims;
pub mod credentials;
pub mod token;

pub use claims::{ClaimsError, TokenClaims, validate_claims};
pub use credentials::{CredentialStore, StaticCredentialStore, UserRecord};
pub use token::{
    Hs256TokenAuthority, InvalidToken, LoginError, TOKEN_TTL_SECS, TokenService, TokenValidator,
};
