//! Common password list
//!
//! A fixed denylist of frequently used passwords. Matching is exact and
//! case-insensitive.

/// Passwords that zero out the score regardless of their composition.
pub const COMMON_PASSWORDS: [&str; 10] = [
    "password",
    "123456",
    "qwerty",
    "abc123",
    "12345678",
    "password1",
    "111111",
    "welcome",
    "admin",
    "letmein",
];

/// Checks if a password is on the common password list.
///
/// Returns `true` only for an exact match after lowercasing; substrings
/// such as `"mypassword"` do not match.
pub fn is_common_password(password: &str) -> bool {
    let lowered = password.to_lowercase();
    COMMON_PASSWORDS.iter().any(|&common| common == lowered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_common_password_true() {
        for pwd in COMMON_PASSWORDS {
            assert!(is_common_password(pwd), "{} should be common", pwd);
        }
    }

    #[test]
    fn test_is_common_password_case_insensitive() {
        assert!(is_common_password("PASSWORD"));
        assert!(is_common_password("QwErTy"));
        assert!(is_common_password("LetMeIn"));
    }

    #[test]
    fn test_is_common_password_exact_match_only() {
        assert!(!is_common_password("mypassword"));
        assert!(!is_common_password("password12"));
        assert!(!is_common_password(" admin"));
        assert!(!is_common_password(""));
    }

    #[test]
    fn test_list_is_lowercase() {
        for pwd in COMMON_PASSWORDS {
            assert_eq!(pwd, pwd.to_lowercase());
        }
    }
}
