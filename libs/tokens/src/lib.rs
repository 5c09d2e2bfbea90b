//! Token Issuer/Verifier — signed, time-bounded, issuer-scoped bearer tokens
//!
//! Mints HS256 tokens carrying issuer label, subject (decimal user id),
//! issued-at, and expiry. Verification checks signature, expiry (zero
//! leeway), and issuer scope; any mismatch is a hard rejection.
//!
//! Two scopes exist in practice: short-lived access tokens and long-lived
//! refresh tokens. A token minted for one scope never verifies as the
//! other. Revocation is not this crate's concern; the datastore's
//! revocation ledger is consulted separately by the refresh flow.

mod error;
mod scope;

pub use error::TokenError;
pub use scope::TokenScope;

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use types::UserId;

/// Registered claims carried by every issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub iss: String,
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    /// Parse the subject claim back into a user id.
    pub fn subject(&self) -> Result<UserId, TokenError> {
        self.sub.parse().map_err(|_| TokenError::MalformedSubject)
    }
}

/// Issues and verifies tokens with a process-wide secret.
///
/// The secret is opaque configuration supplied at construction; how it
/// is sourced (environment, file, vault) is the caller's concern.
pub struct TokenKeeper {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKeeper {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    /// Mint a signed token for `subject` under the given scope.
    ///
    /// Expiry is issued-at + `ttl`. Callers normally pass
    /// `scope.default_ttl()`.
    pub fn issue(
        &self,
        subject: UserId,
        scope: TokenScope,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            iss: scope.issuer().to_owned(),
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding).map_err(|_| TokenError::Signing)
    }

    /// Verify signature, expiry, and issuer scope, returning the claims.
    ///
    /// Expiry is checked with zero leeway. A structurally valid token
    /// minted for the other scope fails with `WrongIssuer`.
    pub fn verify(&self, token: &str, expected: TokenScope) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_issuer(&[expected.issuer()]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        match decode::<Claims>(token, &self.decoding, &validation) {
            Ok(data) => Ok(data.claims),
            Err(e) => Err(match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidIssuer => TokenError::WrongIssuer,
                _ => TokenError::BadSignature,
            }),
        }
    }
}
