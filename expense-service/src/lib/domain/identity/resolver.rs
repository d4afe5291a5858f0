use std::sync::Arc;

use auth::Authenticator;

use crate::domain::identity::errors::IdentityError;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserServicePort;

/// Turns a presented session token into the live user record.
///
/// Transport-agnostic: the HTTP middleware extracts the token and hands it
/// over. Nothing is cached; every call re-reads the user so privilege
/// changes take effect on the next request.
#[derive(Clone)]
pub struct IdentityResolver {
    authenticator: Arc<Authenticator>,
    users: Arc<dyn UserServicePort>,
}

impl IdentityResolver {
    pub fn new(authenticator: Arc<Authenticator>, users: Arc<dyn UserServicePort>) -> Self {
        Self {
            authenticator,
            users,
        }
    }

    /// Resolve the user a token was issued to.
    ///
    /// # Errors
    /// * `MissingToken` - No token presented
    /// * `InvalidToken` - Signature, shape, claims or expiry check failed
    /// * `UnknownSubject` - Token names a user that does not exist
    /// * `Lookup` - User storage failed
    pub async fn resolve(&self, token: Option<&str>) -> Result<User, IdentityError> {
        let token = token
            .filter(|t| !t.is_empty())
            .ok_or(IdentityError::MissingToken)?;

        let user_id: UserId = self.authenticator.verify_token(token)?;

        self.users.get_user(&user_id).await.map_err(|e| match e {
            UserError::NotFound(id) => IdentityError::UnknownSubject(id),
            other => IdentityError::Lookup(other),
        })
    }
}

/// Pass the user through only if it carries the administrator flag.
///
/// # Errors
/// * `Forbidden` - User is not an administrator
pub fn require_admin(user: User) -> Result<User, IdentityError> {
    if user.is_admin {
        Ok(user)
    } else {
        Err(IdentityError::Forbidden)
    }
}
