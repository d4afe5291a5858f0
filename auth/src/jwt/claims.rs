use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// Claims carried by a session token.
///
/// `sub` identifies the user, `exp` is an absolute Unix timestamp after
/// which the token is rejected. Nothing else is trusted from the token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionClaims {
    /// Subject (user identifier)
    pub sub: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl SessionClaims {
    /// Create claims for `subject` valid for `lifetime` starting at `issued_at`.
    pub fn new(subject: impl ToString, issued_at: DateTime<Utc>, lifetime: Duration) -> Self {
        Self {
            sub: subject.to_string(),
            exp: (issued_at + lifetime).timestamp(),
            iat: issued_at.timestamp(),
        }
    }

    /// Check if token is expired.
    ///
    /// A token stops being valid at the exact second of its expiry.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }
}

/// Claims as presented by a client, before their presence is confirmed.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PresentedClaims {
    pub sub: Option<String>,
    pub exp: Option<i64>,
    pub iat: Option<i64>,
}

impl PresentedClaims {
    pub(crate) fn into_session_claims(self) -> Result<SessionClaims, JwtError> {
        let sub = self
            .sub
            .filter(|s| !s.is_empty())
            .ok_or_else(|| JwtError::MissingClaim("sub".to_string()))?;
        let exp = self
            .exp
            .ok_or_else(|| JwtError::MissingClaim("exp".to_string()))?;

        Ok(SessionClaims {
            sub,
            exp,
            iat: self.iat.unwrap_or_default(),
        })
    }
}
