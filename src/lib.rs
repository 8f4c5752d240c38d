//! Password strength checking library
//!
//! Scores a password out of 110 with a line of feedback per check, and maps
//! the score to a strength label. Shared by the console loop and the web
//! form front ends.
//!
//! # Features
//!
//! - `web`: axum front end (`web::router`, `web::serve`)
//! - `cli` (default): the `pwd-check` binary, implies `web`
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_CHECK_ADDR`: listen address for the web front end
//!   (default: `127.0.0.1:5000`)
//!
//! # Example
//!
//! ```rust
//! use pwd_check::{evaluate_password_strength, PasswordStrength};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Abcdef1!".to_string().into());
//! let evaluation = evaluate_password_strength(&password);
//!
//! assert_eq!(evaluation.score.value(), 110);
//! assert_eq!(evaluation.strength(), PasswordStrength::VeryStrong);
//! for line in &evaluation.feedback {
//!     println!("{line}");
//! }
//! ```

mod common;
mod evaluator;
mod mask;
mod sections;
mod types;

pub mod config;
pub mod console;
pub mod error;

#[cfg(feature = "web")]
pub mod web;

// Public API
pub use common::{COMMON_PASSWORDS, is_common_password};
pub use error::{AppError, ConfigError};
pub use evaluator::{evaluate, evaluate_password_strength};
pub use mask::{MASK_CHAR, mask_password};
pub use types::{
    Feedback, FeedbackKind, PasswordEvaluation, PasswordScore, PasswordStrength, strength_label,
};
