//! Authentication utilities library
//!
//! Provides the authentication core used by the expense service:
//! - Password strength policy
//! - Password hashing (Argon2id, 72-byte input limit)
//! - Session token issuance and verification (HS256 JWT)
//! - Injectable clock for expiry checks
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Policy and Hashing
//! ```
//! use auth::{PasswordHasher, PasswordPolicy};
//!
//! PasswordPolicy::new().validate("Passw0rd!").unwrap();
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("Passw0rd!").unwrap();
//! assert!(hasher.verify("Passw0rd!", &hash));
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Register: validate and hash password
//! auth.validate_password("Passw0rd!").unwrap();
//! let hash = auth.hash_password("Passw0rd!").unwrap();
//!
//! // Login: verify and issue token
//! let result = auth.authenticate("Passw0rd!", &hash, 7u32).unwrap();
//!
//! // Validate token
//! let subject: u32 = auth.verify_token(&result.access_token).unwrap();
//! assert_eq!(subject, 7);
//! ```

pub mod authenticator;
pub mod clock;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use authenticator::DEFAULT_TOKEN_LIFETIME_MINUTES;
pub use clock::Clock;
pub use clock::ManualClock;
pub use clock::SystemClock;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::SessionClaims;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use password::PasswordPolicy;
pub use password::WeakPasswordError;
