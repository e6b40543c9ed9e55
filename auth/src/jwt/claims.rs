use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::principal::Authority;
use crate::principal::Principal;

/// Claim set carried inside a signed token.
///
/// The token is self-contained: everything needed to rebuild the request's
/// principal travels here, covered by the signature. No server-side record
/// exists per token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Authorities granted to the subject
    pub authorities: Vec<Authority>,
}

impl Claims {
    /// Build the claim set for a principal with the given validity window.
    pub fn for_principal(principal: &Principal, validity_seconds: i64) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::seconds(validity_seconds);

        Self {
            sub: principal.username.clone(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
            authorities: principal.authorities.clone(),
        }
    }

    /// Whether the claim set is expired at `current_timestamp`.
    ///
    /// A token whose expiry equals the current instant is already expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }

    /// Rebuild the principal these claims describe.
    pub fn into_principal(self) -> Principal {
        Principal {
            username: self.sub,
            authorities: self.authorities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_principal() {
        let principal = Principal::new("alice", vec![Authority::User, Authority::Admin]);
        let claims = Claims::for_principal(&principal, 3600);

        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.exp - claims.iat, 3600);
        assert_eq!(claims.authorities, vec![Authority::User, Authority::Admin]);
    }

    #[test]
    fn test_is_expired() {
        let principal = Principal::new("alice", vec![]);
        let mut claims = Claims::for_principal(&principal, 0);
        claims.iat = 1000;
        claims.exp = 2000;

        assert!(!claims.is_expired(1999));
        assert!(claims.is_expired(2000));
        assert!(claims.is_expired(2001));
    }

    #[test]
    fn test_into_principal() {
        let principal = Principal::new("bob", vec![Authority::Admin]);
        let claims = Claims::for_principal(&principal, 60);
        assert_eq!(claims.into_principal(), principal);
    }
}
