//! Character variety sections - uppercase, lowercase, numbers, special chars.
//!
//! Letter and digit classes are ASCII only. A special character is anything
//! that is neither a letter nor a digit, including whitespace.

use secrecy::{ExposeSecret, SecretString};
use super::SectionOutcome;

const CLASS_POINTS: u32 = 25;
const SPECIAL_BONUS: u32 = 10;

fn contains(password: &SecretString, predicate: impl Fn(char) -> bool) -> bool {
    password.expose_secret().chars().any(predicate)
}

pub fn uppercase_section(password: &SecretString) -> SectionOutcome {
    if contains(password, |c| c.is_ascii_uppercase()) {
        SectionOutcome::passed(CLASS_POINTS, "Contains uppercase letter")
    } else {
        SectionOutcome::failed("Add at least one uppercase letter (A-Z)")
    }
}

pub fn lowercase_section(password: &SecretString) -> SectionOutcome {
    if contains(password, |c| c.is_ascii_lowercase()) {
        SectionOutcome::passed(CLASS_POINTS, "Contains lowercase letter")
    } else {
        SectionOutcome::failed("Add at least one lowercase letter (a-z)")
    }
}

pub fn digit_section(password: &SecretString) -> SectionOutcome {
    if contains(password, |c| c.is_ascii_digit()) {
        SectionOutcome::passed(CLASS_POINTS, "Contains number")
    } else {
        SectionOutcome::failed("Add at least one number (0-9)")
    }
}

/// Bonus only: a missing special character costs nothing and reports nothing.
pub fn special_section(password: &SecretString) -> SectionOutcome {
    if contains(password, |c| !c.is_alphanumeric()) {
        SectionOutcome::passed(SPECIAL_BONUS, "Contains special character (bonus!)")
    } else {
        SectionOutcome::silent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_variety_section_missing_uppercase() {
        let result = uppercase_section(&secret("lowercase123!"));
        assert_eq!(result, SectionOutcome::failed("Add at least one uppercase letter (A-Z)"));
    }

    #[test]
    fn test_variety_section_missing_lowercase() {
        let result = lowercase_section(&secret("UPPERCASE123!"));
        assert_eq!(result, SectionOutcome::failed("Add at least one lowercase letter (a-z)"));
    }

    #[test]
    fn test_variety_section_missing_numbers() {
        let result = digit_section(&secret("NoNumbers!"));
        assert_eq!(result, SectionOutcome::failed("Add at least one number (0-9)"));
    }

    #[test]
    fn test_variety_section_missing_special_is_silent() {
        let result = special_section(&secret("NoSpecial123"));
        assert_eq!(result, SectionOutcome::silent());
    }

    #[test]
    fn test_variety_section_all_categories() {
        let pwd = secret("HasAll123!@#");
        assert_eq!(uppercase_section(&pwd).points, 25);
        assert_eq!(lowercase_section(&pwd).points, 25);
        assert_eq!(digit_section(&pwd).points, 25);
        assert_eq!(special_section(&pwd).points, 10);
    }

    #[test]
    fn test_variety_section_empty_password_fails_everything() {
        let pwd = secret("");
        assert_eq!(uppercase_section(&pwd).points, 0);
        assert_eq!(lowercase_section(&pwd).points, 0);
        assert_eq!(digit_section(&pwd).points, 0);
        assert_eq!(special_section(&pwd), SectionOutcome::silent());
    }

    #[test]
    fn test_variety_section_whitespace_is_special() {
        assert_eq!(special_section(&secret("two words")).points, 10);
    }

    #[test]
    fn test_variety_section_non_ascii_letters() {
        // only the ASCII letters in "Écolé" count
        let pwd = secret("Écolé");
        assert_eq!(uppercase_section(&pwd).points, 0);
        assert_eq!(lowercase_section(&pwd).points, 25);
        assert_eq!(uppercase_section(&secret("ÉCOLE")).points, 25);
        assert_eq!(uppercase_section(&secret("ÉÀÖ")).points, 0);
        assert_eq!(special_section(&secret("é")), SectionOutcome::silent());
    }
}
