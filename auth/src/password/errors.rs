use thiserror::Error;

/// Error type for password hashing.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}

/// Password rejected by the strength policy.
///
/// Variants are listed in the order the rules are checked; only the first
/// violated rule is ever reported.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WeakPasswordError {
    #[error("Password must be at least {min} characters long")]
    TooShort { min: usize, actual: usize },

    #[error("Password must contain at least one uppercase letter")]
    MissingUppercase,

    #[error("Password must contain at least one lowercase letter")]
    MissingLowercase,

    #[error("Password must contain at least one digit")]
    MissingDigit,

    #[error("Password must contain at least one symbol ({symbols})")]
    MissingSymbol { symbols: &'static str },
}
