//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;
#[cfg(feature = "tracing")]
use secrecy::ExposeSecret;

use crate::sections::{
    Section, common_password_section, digit_section, length_section, lowercase_section,
    special_section, uppercase_section,
};
use crate::types::{PasswordEvaluation, PasswordScore};

/// Sections in scoring and feedback order.
const SECTIONS: [(&str, Section); 5] = [
    ("length", length_section),
    ("uppercase", uppercase_section),
    ("lowercase", lowercase_section),
    ("digit", digit_section),
    ("special", special_section),
];

/// Evaluates password strength and returns a detailed evaluation.
///
/// Every section contributes its points independently. A password on the
/// common list scores exactly zero and gets a warning in front of the
/// section feedback, which is kept as-is.
pub fn evaluate_password_strength(password: &SecretString) -> PasswordEvaluation {
    let mut feedback = Vec::with_capacity(SECTIONS.len() + 1);
    let mut score = 0;

    for (_section_name, section_fn) in SECTIONS {
        let outcome = section_fn(password);

        #[cfg(feature = "tracing")]
        tracing::trace!(section = _section_name, points = outcome.points, "section evaluated");

        score += outcome.points;
        feedback.extend(outcome.feedback);
    }

    let warning = common_password_section(password);
    let common = warning.is_some();
    if let Some(warning) = warning {
        score = 0;
        feedback.insert(0, warning);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        length = password.expose_secret().chars().count(),
        score,
        common,
        "password evaluated"
    );

    PasswordEvaluation {
        score: PasswordScore::new(score),
        feedback,
        common,
    }
}

/// Convenience wrapper for callers holding a plain string.
pub fn evaluate(password: &str) -> PasswordEvaluation {
    evaluate_password_strength(&SecretString::new(password.into()))
}
