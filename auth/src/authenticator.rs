use std::str::FromStr;
use std::sync::Arc;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::clock::Clock;
use crate::clock::SystemClock;
use crate::jwt::claims::PresentedClaims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::jwt::SessionClaims;
use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::password::PasswordPolicy;
use crate::password::WeakPasswordError;

/// Session token lifetime used unless configured otherwise.
pub const DEFAULT_TOKEN_LIFETIME_MINUTES: i64 = 60;

/// Authentication coordinator combining password policy, password
/// verification and session token handling.
///
/// The signing secret, token lifetime and clock are all injected; nothing
/// here reads global state.
pub struct Authenticator {
    password_policy: PasswordPolicy,
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    clock: Arc<dyn Clock>,
    token_lifetime: Duration,
}

/// Result of successful authentication.
#[derive(Debug, Clone)]
pub struct AuthenticationResult {
    /// Signed session token
    pub access_token: String,
    /// Absolute expiry of `access_token`
    pub expires_at: DateTime<Utc>,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// Tokens live for [`DEFAULT_TOKEN_LIFETIME_MINUTES`] and time is read
    /// from the system clock.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for JWT signing
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self {
            password_policy: PasswordPolicy::new(),
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(jwt_secret).with_required_claims(&["sub", "exp"]),
            clock: Arc::new(SystemClock),
            token_lifetime: Duration::minutes(DEFAULT_TOKEN_LIFETIME_MINUTES),
        }
    }

    /// Override how long issued tokens stay valid.
    pub fn with_token_lifetime(mut self, lifetime: Duration) -> Self {
        self.token_lifetime = lifetime;
        self
    }

    /// Override the time source.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn token_lifetime(&self) -> Duration {
        self.token_lifetime
    }

    /// Check a candidate password against the strength policy.
    ///
    /// # Errors
    /// * `WeakPasswordError` - First policy rule the password violates
    pub fn validate_password(&self, password: &str) -> Result<(), WeakPasswordError> {
        self.password_policy.validate(password)
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a plaintext password against a stored hash.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Verify credentials and issue a session token for `subject`.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Identity the token is bound to
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: impl ToString,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.issue(subject)?)
    }

    /// Issue a session token for `subject` without password verification.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn issue_token(&self, subject: impl ToString) -> Result<String, JwtError> {
        self.issue(subject).map(|result| result.access_token)
    }

    /// Validate a session token and return its parsed subject.
    ///
    /// # Errors
    /// * `InvalidToken` - Bad signature, malformed token or unparseable subject
    /// * `MissingClaim` - `sub` or `exp` absent
    /// * `TokenExpired` - Current time is at or past `exp`
    pub fn verify_token<T: FromStr>(&self, token: &str) -> Result<T, JwtError> {
        let claims = self
            .jwt_handler
            .decode::<PresentedClaims>(token)?
            .into_session_claims()?;

        if claims.is_expired(self.clock.now().timestamp()) {
            return Err(JwtError::TokenExpired);
        }

        claims
            .sub
            .parse::<T>()
            .map_err(|_| JwtError::InvalidToken("subject is not a valid identifier".to_string()))
    }

    fn issue(&self, subject: impl ToString) -> Result<AuthenticationResult, JwtError> {
        let claims = SessionClaims::new(subject, self.clock.now(), self.token_lifetime);
        let access_token = self.jwt_handler.encode(&claims)?;
        let expires_at =
            DateTime::from_timestamp(claims.exp, 0).unwrap_or(DateTime::<Utc>::MAX_UTC);

        Ok(AuthenticationResult {
            access_token,
            expires_at,
        })
    }
}
