//! Evaluation result types: score, strength buckets and feedback lines.

use std::fmt;

/// Numeric strength score.
///
/// Ranges from 0 to 110: four required checks worth 25 points each plus a
/// 10 point bonus for special characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct PasswordScore(u32);

impl PasswordScore {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Qualitative strength bucket derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    /// Maps a score onto its bucket. Thresholds are half-open and scores
    /// above 100 are not clamped.
    pub fn from_score(score: u32) -> Self {
        match score {
            0..25 => PasswordStrength::VeryWeak,
            25..50 => PasswordStrength::Weak,
            50..75 => PasswordStrength::Medium,
            75..100 => PasswordStrength::Strong,
            _ => PasswordStrength::VeryStrong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::VeryWeak => "Very Weak",
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Medium => "Medium",
            PasswordStrength::Strong => "Strong",
            PasswordStrength::VeryStrong => "Very Strong",
        }
    }

    /// Kebab-case name, used as a CSS class by the web page.
    pub fn slug(&self) -> &'static str {
        match self {
            PasswordStrength::VeryWeak => "very-weak",
            PasswordStrength::Weak => "weak",
            PasswordStrength::Medium => "medium",
            PasswordStrength::Strong => "strong",
            PasswordStrength::VeryStrong => "very-strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returns the strength label for a raw score.
pub fn strength_label(score: u32) -> &'static str {
    PasswordStrength::from_score(score).label()
}

/// Outcome of a single feedback line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Pass,
    Fail,
    Warning,
}

impl FeedbackKind {
    pub fn marker(&self) -> &'static str {
        match self {
            FeedbackKind::Pass => "✓",
            FeedbackKind::Fail => "✗",
            FeedbackKind::Warning => "⚠",
        }
    }
}

/// A single human-readable feedback line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub message: &'static str,
}

impl Feedback {
    pub const fn pass(message: &'static str) -> Self {
        Self {
            kind: FeedbackKind::Pass,
            message,
        }
    }

    pub const fn fail(message: &'static str) -> Self {
        Self {
            kind: FeedbackKind::Fail,
            message,
        }
    }

    pub const fn warning(message: &'static str) -> Self {
        Self {
            kind: FeedbackKind::Warning,
            message,
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind.marker(), self.message)
    }
}

/// Full result of evaluating one password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordEvaluation {
    pub score: PasswordScore,
    pub feedback: Vec<Feedback>,
    /// Whether the password matched the common-password list.
    pub common: bool,
}

impl PasswordEvaluation {
    pub fn strength(&self) -> PasswordStrength {
        PasswordStrength::from_score(self.score.value())
    }

    /// Plain feedback messages, in order, without markers.
    pub fn messages(&self) -> Vec<&'static str> {
        self.feedback.iter().map(|f| f.message).collect()
    }
}
