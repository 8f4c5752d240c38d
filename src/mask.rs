//! Display masking for passwords.

pub const MASK_CHAR: char = '*';

/// Replaces every character of the password with [`MASK_CHAR`].
pub fn mask_password(password: &str) -> String {
    std::iter::repeat_n(MASK_CHAR, password.chars().count()).collect()
}
