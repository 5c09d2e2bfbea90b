use thiserror::Error;

/// Why a token was rejected (or could not be minted).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("token expired")]
    Expired,

    #[error("token signature invalid")]
    BadSignature,

    #[error("token issued for a different scope")]
    WrongIssuer,

    #[error("token subject is not a user id")]
    MalformedSubject,

    #[error("token could not be signed")]
    Signing,
}
