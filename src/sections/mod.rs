//! Password evaluation sections
//!
//! Each section checks one aspect of the password and reports the points
//! it earned along with an optional feedback line.

mod common;
mod length;
mod variety;

pub use common::common_password_section;
pub use length::length_section;
pub use variety::{digit_section, lowercase_section, special_section, uppercase_section};

use crate::types::Feedback;

/// Result of a single scoring section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionOutcome {
    pub points: u32,
    pub feedback: Option<Feedback>,
}

impl SectionOutcome {
    pub const fn passed(points: u32, message: &'static str) -> Self {
        Self {
            points,
            feedback: Some(Feedback::pass(message)),
        }
    }

    pub const fn failed(message: &'static str) -> Self {
        Self {
            points: 0,
            feedback: Some(Feedback::fail(message)),
        }
    }

    /// No points and nothing to report.
    pub const fn silent() -> Self {
        Self {
            points: 0,
            feedback: None,
        }
    }
}

/// Signature shared by every scoring section.
pub type Section = fn(&secrecy::SecretString) -> SectionOutcome;
