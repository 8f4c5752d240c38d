//! Common password section - detects passwords from the denylist.

use crate::common::is_common_password;
use crate::types::Feedback;
use secrecy::{ExposeSecret, SecretString};

/// Checks if the password is on the common password list.
///
/// # Returns
/// - `Some(warning)` if the password is common; the caller zeroes the score
/// - `None` otherwise
pub fn common_password_section(password: &SecretString) -> Option<Feedback> {
    if is_common_password(password.expose_secret()) {
        return Some(Feedback::warning("WARNING: This is a commonly used password!"));
    }
    None
}
