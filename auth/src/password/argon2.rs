use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// Maximum number of password bytes that take part in hashing.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Password hashing implementation.
///
/// Provides cryptographic password hashing (internally uses Argon2id).
/// Passwords are cut to their first [`MAX_PASSWORD_BYTES`] bytes before
/// hashing and before verification, so long passwords sharing a prefix are
/// interchangeable.
pub struct PasswordHasher;

impl PasswordHasher {
    /// Create a new password hasher instance.
    ///
    /// # Returns
    /// PasswordHasher instance configured with secure defaults
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password securely.
    ///
    /// Uses Argon2id with random salt generation. Callers are expected to run
    /// the password through [`super::PasswordPolicy`] first.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(truncate(password).as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// A stored hash that cannot be parsed never matches.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored password hash in PHC string format
    ///
    /// # Returns
    /// True if password matches, false otherwise
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(truncate(password).as_bytes(), &parsed_hash)
            .is_ok()
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Cut `password` to at most [`MAX_PASSWORD_BYTES`] bytes.
///
/// The cut backs off to the previous character boundary, dropping any
/// partially included trailing character.
pub fn truncate(password: &str) -> &str {
    if password.len() <= MAX_PASSWORD_BYTES {
        return password;
    }

    let mut end = MAX_PASSWORD_BYTES;
    while !password.is_char_boundary(end) {
        end -= 1;
    }
    &password[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let password = "Passw0rd!";

        // Hash the password
        let hash = hasher.hash(password).expect("Failed to hash password");
        assert!(hash.starts_with("$argon2id$"));

        // Verify correct password
        assert!(hasher.verify(password, &hash));

        // Verify incorrect password
        assert!(!hasher.verify("Passw0rd?", &hash));
    }

    #[test]
    fn test_same_password_hashes_differently() {
        let hasher = PasswordHasher::new();

        let first = hasher.hash("Passw0rd!").unwrap();
        let second = hasher.hash("Passw0rd!").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("Passw0rd!", &first));
        assert!(hasher.verify("Passw0rd!", &second));
    }

    #[test]
    fn test_verify_malformed_hash_is_false() {
        let hasher = PasswordHasher::new();
        assert!(!hasher.verify("Passw0rd!", "invalid_hash"));
        assert!(!hasher.verify("Passw0rd!", ""));
        assert!(!hasher.verify("Passw0rd!", "$argon2id$v=19$broken"));
    }

    #[test]
    fn test_passwords_sharing_first_72_bytes_are_equivalent() {
        let hasher = PasswordHasher::new();
        let prefix = "Aa1!".repeat(18);
        assert_eq!(prefix.len(), 72);

        let first = format!("{}tail-one", prefix);
        let second = format!("{}another-tail", prefix);

        let hash = hasher.hash(&first).unwrap();
        assert!(hasher.verify(&second, &hash));
        assert!(hasher.verify(&prefix, &hash));
    }

    #[test]
    fn test_difference_inside_first_72_bytes_is_detected() {
        let hasher = PasswordHasher::new();
        let first = format!("X{}", "Aa1!".repeat(20));
        let second = format!("Y{}", "Aa1!".repeat(20));

        let hash = hasher.hash(&first).unwrap();
        assert!(!hasher.verify(&second, &hash));
    }

    #[test]
    fn test_truncate_short_password_untouched() {
        assert_eq!(truncate("Passw0rd!"), "Passw0rd!");
    }

    #[test]
    fn test_truncate_backs_off_to_char_boundary() {
        // 71 ASCII bytes followed by a 2-byte character straddling the limit.
        let password = format!("{}é", "a".repeat(71));
        assert_eq!(password.len(), 73);

        let truncated = truncate(&password);
        assert_eq!(truncated.len(), 71);
        assert!(truncated.chars().all(|c| c == 'a'));
    }

    #[test]
    fn test_truncate_multibyte_exact_fit() {
        // 24 three-byte characters fill the limit exactly.
        let password = "€".repeat(30);
        assert_eq!(truncate(&password), "€".repeat(24));
    }
}
