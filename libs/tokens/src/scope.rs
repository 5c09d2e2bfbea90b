use chrono::Duration;

/// Intended use of a token, embedded as the issuer claim.
///
/// Verifiers name the scope they expect; a mismatch is rejected even
/// when the token is otherwise valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenScope {
    /// Short-lived credential presented on normal API calls.
    Access,
    /// Long-lived credential exchanged for fresh access tokens.
    Refresh,
}

impl TokenScope {
    /// Issuer label embedded in (and required of) tokens of this scope.
    pub fn issuer(&self) -> &'static str {
        match self {
            TokenScope::Access => "roost-access",
            TokenScope::Refresh => "roost-refresh",
        }
    }

    /// TTL used when the caller has no reason to deviate.
    pub fn default_ttl(&self) -> Duration {
        match self {
            TokenScope::Access => Duration::hours(1),
            TokenScope::Refresh => Duration::days(60),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issuer_labels_differ() {
        assert_ne!(
            TokenScope::Access.issuer(),
            TokenScope::Refresh.issuer()
        );
    }

    #[test]
    fn test_default_ttls() {
        assert_eq!(TokenScope::Access.default_ttl(), Duration::hours(1));
        assert_eq!(TokenScope::Refresh.default_ttl(), Duration::days(60));
    }
}
