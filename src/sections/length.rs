//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};
use super::SectionOutcome;

pub const MIN_LENGTH: usize = 8;
const POINTS: u32 = 25;

/// Checks if the password meets minimum length requirements.
///
/// Length is counted in characters, so multi-byte characters count once.
pub fn length_section(password: &SecretString) -> SectionOutcome {
    if password.expose_secret().chars().count() >= MIN_LENGTH {
        SectionOutcome::passed(POINTS, "Good length (8+ characters)")
    } else {
        SectionOutcome::failed("Too short - need at least 8 characters")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FeedbackKind;

    #[test]
    fn test_length_section_too_short() {
        let pwd = SecretString::new("Short1!".to_string().into());
        let result = length_section(&pwd);
        assert_eq!(result, SectionOutcome::failed("Too short - need at least 8 characters"));
        assert_eq!(result.points, 0);
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        let pwd = SecretString::new("12345678".to_string().into());
        let result = length_section(&pwd);
        assert_eq!(result.points, 25);
        assert_eq!(result.feedback.map(|f| f.kind), Some(FeedbackKind::Pass));
    }

    #[test]
    fn test_length_section_counts_chars_not_bytes() {
        // 4 characters, 8 bytes
        let pwd = SecretString::new("éééé".to_string().into());
        assert_eq!(length_section(&pwd).points, 0);

        let pwd = SecretString::new("éééééééé".to_string().into());
        assert_eq!(length_section(&pwd).points, 25);
    }

    #[test]
    fn test_length_section_empty() {
        let pwd = SecretString::new("".to_string().into());
        assert_eq!(length_section(&pwd).points, 0);
    }
}
