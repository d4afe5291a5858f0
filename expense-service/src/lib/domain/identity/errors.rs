use auth::JwtError;
use thiserror::Error;

use crate::domain::user::errors::UserError;

/// Why a request could not be tied to a privileged enough user.
///
/// Everything except `Forbidden` is reported to clients as the same
/// "Not authenticated" response; the variants exist for logging.
#[derive(Debug, Clone, Error)]
pub enum IdentityError {
    #[error("No session token presented")]
    MissingToken,

    #[error("Session token rejected: {0}")]
    InvalidToken(#[from] JwtError),

    #[error("Token subject has no stored user: {0}")]
    UnknownSubject(String),

    #[error("User lookup failed: {0}")]
    Lookup(UserError),

    #[error("Administrator privileges required")]
    Forbidden,
}
