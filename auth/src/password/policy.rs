use super::errors::WeakPasswordError;

/// Password strength rules applied before a password is ever hashed.
///
/// Rules are checked in a fixed order so a rejected password always yields
/// the same, single message:
/// 1. minimum length
/// 2. an uppercase letter
/// 3. a lowercase letter
/// 4. a digit
/// 5. a symbol from [`PasswordPolicy::SYMBOLS`]
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordPolicy;

impl PasswordPolicy {
    pub const MIN_LENGTH: usize = 8;
    pub const SYMBOLS: &'static str = "!@#$%^&*()-_=+[]{};:'\",.<>/?\\|`~";

    pub fn new() -> Self {
        Self
    }

    /// Check a plaintext password against every rule.
    ///
    /// # Errors
    /// * `WeakPasswordError` - The first rule the password violates
    pub fn validate(&self, password: &str) -> Result<(), WeakPasswordError> {
        let length = password.chars().count();
        if length < Self::MIN_LENGTH {
            return Err(WeakPasswordError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            });
        }

        if !password.chars().any(char::is_uppercase) {
            return Err(WeakPasswordError::MissingUppercase);
        }

        if !password.chars().any(char::is_lowercase) {
            return Err(WeakPasswordError::MissingLowercase);
        }

        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(WeakPasswordError::MissingDigit);
        }

        if !password.chars().any(|c| Self::SYMBOLS.contains(c)) {
            return Err(WeakPasswordError::MissingSymbol {
                symbols: Self::SYMBOLS,
            });
        }

        Ok(())
    }
}
