/// Symbols that satisfy the "special character" class
pub const ALLOWED_SYMBOLS: &[char] = &['@', '$', '!', '%', '*', '?', '&', '#'];

/// Minimum password length, in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Stateless password complexity check.
///
/// A password is accepted when it is at least [`MIN_PASSWORD_LENGTH`]
/// characters long and contains at least one ASCII lowercase letter, one
/// ASCII uppercase letter, one ASCII digit and one of [`ALLOWED_SYMBOLS`].
pub struct PasswordPolicy;

impl PasswordPolicy {
    /// User-facing description of the rule
    pub const RULE: &'static str = "Password must be at least 8 characters and contain at least \
         one uppercase letter, one lowercase letter, one digit and one symbol from @$!%*?&#";

    pub fn validate(password: &str) -> bool {
        password.chars().count() >= MIN_PASSWORD_LENGTH
            && password.chars().any(|c| c.is_ascii_lowercase())
            && password.chars().any(|c| c.is_ascii_uppercase())
            && password.chars().any(|c| c.is_ascii_digit())
            && password.chars().any(|c| ALLOWED_SYMBOLS.contains(&c))
    }
}
